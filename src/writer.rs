use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;

use crate::feed::EarthquakeFeed;

/// Writes earthquake feeds as GeoJSON files.
pub struct FeedWriter {
    writer: Box<dyn Write>,
    feature_count: usize,
}

impl FeedWriter {
    /// Creates a new FeedWriter for the specified file path.
    ///
    /// Automatically enables Brotli compression if the file path ends with `.br`
    /// (e.g., `week.geojson.br`). Compressed files are read back transparently by
    /// [`FileFeedReader`](crate::reader::FileFeedReader).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use quakemap::FeedWriter;
    /// # fn main() -> anyhow::Result<()> {
    /// let mut writer = FeedWriter::new("week.geojson")?;
    /// let mut compressed = FeedWriter::new("week.geojson.br")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;

        let writer: Box<dyn Write> = if file_path.ends_with(".br") {
            let buf_writer = BufWriter::new(file);
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(buf_writer, 4096, &params))
        } else {
            Box::new(BufWriter::new(file))
        };

        Ok(FeedWriter {
            writer,
            feature_count: 0,
        })
    }

    /// Serializes the whole feed as one `FeatureCollection`.
    pub fn write_feed(&mut self, feed: &EarthquakeFeed) -> Result<()> {
        let json = serde_json::to_string_pretty(&feed.to_geojson())
            .context("Failed to serialize feed to JSON")?;

        writeln!(self.writer, "{}", json).context("Failed to write feed")?;
        self.writer.flush().context("Failed to flush writer")?;

        self.feature_count += feed.len();
        Ok(())
    }

    /// Number of features written so far.
    pub fn feature_count(&self) -> usize {
        self.feature_count
    }
}

impl Drop for FeedWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
