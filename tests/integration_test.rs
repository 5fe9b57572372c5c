use quakemap::{
    BaseLayer, EarthquakeFeed, FaultLineOverlay, FaultLineSet, FeedLocation, FeedReader, FeedWriter,
    FileFeedReader, LayerSelection, MapComposer, MapConfig, SyntheticFeedReader,
};
use anyhow::Result;
use std::fs;
use std::env;
use std::time::Duration;

const WEEK_FEED: &str = r#"{
    "type": "FeatureCollection",
    "metadata": {"generated": 1700000000000, "title": "USGS All Earthquakes, Past Week", "count": 3},
    "features": [
        {"type": "Feature", "id": "ak0001",
         "properties": {"mag": 2.5, "place": "10km NW of Anchorage, Alaska", "time": 1699990000000,
                        "url": "https://earthquake.usgs.gov/earthquakes/eventpage/ak0001"},
         "geometry": {"type": "Point", "coordinates": [-150.0, 61.3, 35.2]}},
        {"type": "Feature", "id": "ci0002",
         "properties": {"mag": null, "place": null, "time": 1699991000000},
         "geometry": {"type": "Point", "coordinates": [-117.5, 34.1, 8.0]}},
        {"type": "Feature", "id": "us0003",
         "properties": {"mag": 6.1, "place": "South of the Fiji Islands", "time": 1699992000000},
         "geometry": {"type": "Point", "coordinates": [179.9, -23.6, 550.0]}}
    ]
}"#;

const PLATES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"PlateName": "Pacific"},
         "geometry": {"type": "Polygon", "coordinates": [[[170,-20],[-170,-20],[-170,20],[170,20],[170,-20]]]}},
        {"type": "Feature", "properties": {"PlateName": "Juan de Fuca"},
         "geometry": {"type": "LineString", "coordinates": [[-130,40],[-127,45],[-125,50]]}}
    ]
}"#;

fn temp_path(name: &str) -> String {
    let path = env::temp_dir().join(format!("quakemap_{}_{}", std::process::id(), name));
    let _ = fs::remove_file(&path);
    path.to_string_lossy().into_owned()
}

#[test]
fn test_file_feed_composes_map() -> Result<()> {
    let quake_file = temp_path("week.geojson");
    let plate_file = temp_path("plates.json");
    fs::write(&quake_file, WEEK_FEED)?;
    fs::write(&plate_file, PLATES)?;

    let reader = FileFeedReader::new();
    let feed = reader.read_earthquakes(&quake_file)?;
    let plates = reader.read_fault_lines(&plate_file)?;

    assert_eq!(feed.len(), 3);
    assert_eq!(feed.title.as_deref(), Some("USGS All Earthquakes, Past Week"));
    assert_eq!(plates.len(), 2);

    let mut composer = MapComposer::new(MapConfig::default());
    composer.earthquakes_loaded(&feed);
    composer.fault_lines_loaded(Ok(plates));

    let composition = composer.composition().expect("map composed");
    let markers = composition.earthquakes().markers();

    // Magnitude 2.5: 62.5 km radius, third color.
    assert_eq!(markers[0].style.radius_m, 62_500.0);
    assert_eq!(markers[0].style.color.hex(), "#ffcc33");
    // Null magnitude is treated as 0: smallest bucket, nothing to draw.
    assert_eq!(markers[1].feature.magnitude, 0.0);
    assert_eq!(markers[1].feature.place, "");
    assert!(!markers[1].style.is_drawable());
    assert_eq!(markers[2].style.color.hex(), "#ff3333");

    assert_eq!(composition.visible_markers().len(), 2);
    assert_eq!(composition.visible_fault_lines().len(), 2);
    assert_eq!(composition.legend().len(), 6);

    fs::remove_file(&quake_file)?;
    fs::remove_file(&plate_file)?;
    Ok(())
}

#[test]
fn test_write_and_read_compressed_feed() -> Result<()> {
    let feed = SyntheticFeedReader::with_config(25, 25, 0, 7).generate_earthquakes();

    for name in ["synthetic.geojson", "synthetic.geojson.br"] {
        let path = temp_path(name);
        {
            let mut writer = FeedWriter::new(&path)?;
            writer.write_feed(&feed)?;
            assert_eq!(writer.feature_count(), 25);
        }

        let read_back = FileFeedReader::new().read_earthquakes(&path)?;
        assert_eq!(read_back.len(), feed.len());
        for (written, read) in feed.features.iter().zip(&read_back.features) {
            assert_eq!(written.place, read.place);
            assert_eq!(written.time_ms, read.time_ms);
            assert!((written.magnitude - read.magnitude).abs() < 1e-9);
            assert!((written.coordinates.lat - read.coordinates.lat).abs() < 1e-9);
        }

        fs::remove_file(&path)?;
    }

    Ok(())
}

#[test]
fn test_empty_feed_still_builds_map() -> Result<()> {
    let feed = EarthquakeFeed::from_geojson_str(r#"{"type":"FeatureCollection","features":[]}"#)?;

    let mut composer = MapComposer::new(MapConfig::default());
    let composition = composer.earthquakes_loaded(&feed);

    assert!(composition.earthquakes().is_empty());
    assert_eq!(composition.legend().len(), 6);
    assert_eq!(composition.base_layers().len(), 3);
    assert!(composition.fault_lines().is_pending());
    Ok(())
}

#[test]
fn test_fault_lines_before_earthquakes() -> Result<()> {
    let plates = FaultLineSet::from_geojson_str(PLATES)?;
    let feed = EarthquakeFeed::from_geojson_str(WEEK_FEED)?;

    let mut composer = MapComposer::new(MapConfig::default()).with_selection(LayerSelection {
        base: BaseLayer::Satellite,
        show_fault_lines: true,
        show_earthquakes: false,
    });

    composer.fault_lines_loaded(Ok(plates));
    assert!(composer.composition().is_none(), "no map before earthquakes");

    let composition = composer.earthquakes_loaded(&feed);
    assert!(matches!(composition.fault_lines(), FaultLineOverlay::Loaded(_)));
    assert!(composition.visible_markers().is_empty());
    assert_eq!(composition.selection().base, BaseLayer::Satellite);
    Ok(())
}

#[test]
fn test_malformed_feed_is_an_error() -> Result<()> {
    let path = temp_path("broken.geojson");
    fs::write(&path, "{\"type\": \"FeatureCollection\", \"features\": [")?;

    let err = FileFeedReader::new()
        .read_earthquakes(&path)
        .expect_err("truncated JSON must not decode");
    assert!(!format!("{:#}", err).is_empty());

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_synthetic_location_reader() -> Result<()> {
    let location = FeedLocation::parse("synthetic");
    let reader = location.reader(Duration::from_secs(1))?;

    let first = reader.read_earthquakes(&location.target())?;
    let second = reader.read_earthquakes(&location.target())?;
    assert_eq!(first, second, "seeded demo data is reproducible");

    let plates = reader.read_fault_lines(&location.target())?;
    assert!(!plates.is_empty());
    Ok(())
}
