use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use m6803_core::{asm_str, branch_edges, DecodedInstruction, InstructionStream};
use serde_json::json;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "m6803-dis")]
#[command(about = "Linear-sweep disassembler for raw 6803/HD6303 images", long_about = None)]
struct Args {
    /// Raw binary image to disassemble
    image: PathBuf,

    /// Load address of the first byte (decimal, 0x… or $… hex)
    #[arg(long, default_value = "0", value_parser = parse_address)]
    org: u16,

    /// Emit one JSON object per instruction instead of listing lines
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Stop at the first undefined opcode instead of marking it
    #[arg(long, action = ArgAction::SetTrue)]
    stop_on_undefined: bool,
}

fn parse_address(raw: &str) -> Result<u16, String> {
    let parsed = if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix('$')) {
        u16::from_str_radix(hex, 16)
    } else {
        raw.parse()
    };
    parsed.map_err(|err| format!("bad address {raw:?}: {err}"))
}

fn listing_line(address: u16, raw: &[u8], instr: &DecodedInstruction) -> String {
    let bytes = raw
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ");
    let text = asm_str(&instr.tokens());
    let edges = branch_edges(instr, address);
    if edges.is_empty() {
        format!("{address:04x}  {bytes:<8}  {text}")
    } else {
        let targets = edges
            .iter()
            .map(|edge| format!("${:04x}", edge.target))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{address:04x}  {bytes:<8}  {text:<24} ; -> {targets}")
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let image = fs::read(&args.image)
        .with_context(|| format!("reading image {}", args.image.display()))?;

    let mut cursor = 0usize;
    for item in InstructionStream::new(&image, args.org) {
        match item {
            Ok((address, instr)) => {
                let length = instr.total_length() as usize;
                let raw = &image[cursor..cursor + length];
                cursor += length;
                if !instr.is_defined() && args.stop_on_undefined {
                    log::warn!("stopping at undefined opcode {:#04x} at {address:#06x}", raw[0]);
                    break;
                }
                if args.json {
                    let record = json!({
                        "address": address,
                        "length": instr.total_length(),
                        "mnemonic": instr.mnemonic,
                        "tokens": instr.tokens(),
                        "branches": branch_edges(&instr, address),
                    });
                    println!("{record}");
                } else {
                    println!("{}", listing_line(address, raw, &instr));
                }
            }
            Err(err) => {
                log::warn!("{err}");
                break;
            }
        }
    }
    Ok(())
}
