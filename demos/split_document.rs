//! Split a document and print the chunks.
//!
//! ```bash
//! cargo run --example split_document -- [FILE] [CONFIG.toml]
//! RUST_LOG=ragsplit=trace cargo run --example split_document
//! ```
//!
//! Without arguments a built-in sample is split with the default settings.

use std::path::Path;

use ragsplit::{Chunker, RecursiveChunker, SplitterConfig};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "亚马逊FBA物流费用按商品尺寸和重量分段计算。标准尺寸商品按件收费，\
大件商品另有附加费。\n\n旺季（十月至十二月）仓储费上涨，请提前规划库存！\
长期仓储费每月十五日结算。\n\n退货商品经检查后可重新入库、销毁或退回卖家。";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let text = match args.next() {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };
    let config = match args.next() {
        Some(path) => SplitterConfig::load(Path::new(&path))?,
        None => SplitterConfig {
            chunk_size: 40,
            overlap: 5,
            ..SplitterConfig::default()
        },
    };

    let chunker = RecursiveChunker::from_config(&config)?;
    let slabs = chunker.chunk(&text);

    println!("Document: {} chars", text.chars().count());
    println!(
        "Chunks: {} (chunk_size={}, overlap={})\n",
        slabs.len(),
        config.chunk_size,
        config.overlap
    );

    for slab in &slabs {
        println!("[{}] {} chars: {:?}", slab.index, slab.char_len(), slab.text);
    }

    Ok(())
}
