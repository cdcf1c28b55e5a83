//! CLI command implementations

pub mod decode;
pub mod synth;
pub mod trace;

use anyhow::{bail, Context, Result};
use barscan_core::types::Sample;
use barscan_core::ScanConfig;
use bytes::{Buf, BufMut, BytesMut};
use std::fs;

/// On-disk representation of a capture file
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum CaptureFormat {
    /// JSON array of sample values
    Json,
    /// Raw little-endian u16 samples
    Raw,
}

/// Calibration overrides shared by the decoding commands
#[derive(Debug, Clone, clap::Args)]
pub struct Calibration {
    /// Narrow/wide classification cutoff
    #[arg(long)]
    pub wide_ratio: Option<u32>,

    /// HIGH threshold as a fraction of the window maximum
    #[arg(long)]
    pub high_fraction: Option<f32>,

    /// LOW threshold as a multiple of the window minimum
    #[arg(long)]
    pub low_fraction: Option<f32>,

    /// Largest Hamming distance accepted per symbol (0 = exact match)
    #[arg(long)]
    pub tolerance: Option<u32>,

    /// Keep the `*` sentinels in the output text
    #[arg(long)]
    pub include_sentinels: bool,
}

impl Calibration {
    /// Apply the overrides on top of the defaults
    pub fn to_config(&self) -> ScanConfig {
        let mut config = ScanConfig::default();
        if let Some(wide_ratio) = self.wide_ratio {
            config.wide_ratio = wide_ratio;
        }
        if let Some(high_fraction) = self.high_fraction {
            config.high_threshold_fraction = high_fraction;
        }
        if let Some(low_fraction) = self.low_fraction {
            config.low_threshold_fraction = low_fraction;
        }
        if let Some(tolerance) = self.tolerance {
            config.max_hamming_distance = tolerance;
        }
        config.include_sentinels = self.include_sentinels;
        config
    }
}

/// Read a capture file into samples
pub fn read_capture(path: &str, format: CaptureFormat) -> Result<Vec<Sample>> {
    let data =
        fs::read(path).with_context(|| format!("Failed to read capture file: {}", path))?;

    match format {
        CaptureFormat::Json => {
            let samples: Vec<Sample> = serde_json::from_slice(&data)
                .with_context(|| format!("Failed to parse JSON capture: {}", path))?;
            Ok(samples)
        }
        CaptureFormat::Raw => {
            if data.len() % 2 != 0 {
                bail!(
                    "Raw capture {} has odd length {}; expected u16 little-endian samples",
                    path,
                    data.len()
                );
            }
            let mut buf = &data[..];
            let mut samples = Vec::with_capacity(data.len() / 2);
            while buf.has_remaining() {
                samples.push(buf.get_u16_le());
            }
            Ok(samples)
        }
    }
}

/// Write samples to a capture file
pub fn write_capture(path: &str, format: CaptureFormat, samples: &[Sample]) -> Result<()> {
    let data = match format {
        CaptureFormat::Json => serde_json::to_vec_pretty(samples)
            .context("Failed to serialize capture to JSON")?,
        CaptureFormat::Raw => {
            let mut buf = BytesMut::with_capacity(samples.len() * 2);
            for &sample in samples {
                buf.put_u16_le(sample);
            }
            buf.to_vec()
        }
    };

    fs::write(path, data).with_context(|| format!("Failed to write capture file: {}", path))
}
