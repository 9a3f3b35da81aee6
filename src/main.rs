use bmfont_reader::{FontFile, KerningMode};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-fnt-file> [--no-kernings]", args[0]);
        process::exit(1);
    }

    let fnt_path = &args[1];
    let mode = if args.iter().any(|arg| arg == "--no-kernings") {
        KerningMode::Without
    } else {
        KerningMode::With
    };

    println!("Reading BMFont file: {}", fnt_path);
    println!("{}", "=".repeat(60));

    let data = match fs::read(fnt_path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}", fnt_path);
            eprintln!("  {}", e);
            process::exit(1);
        }
    };

    match FontFile::decode(&data, mode) {
        Ok(font) => {
            println!("\n{}", "=".repeat(60));
            println!("SUCCESS! Loaded BMFont data correctly.");
            println!("{}", "=".repeat(60));

            println!("\nFont Information:");
            println!("  Name: {}", font.info.font_name);
            println!("  Size: {}", font.info.font_size);
            println!("  Anti-aliasing: {}", font.info.aa);
            println!("  Outline: {}", font.info.outline);

            println!("\nCommon Metrics:");
            println!("  Line height: {}", font.common.line_height);
            println!("  Baseline: {}", font.common.base);
            println!("  Texture: {}x{}", font.common.scale_w, font.common.scale_h);

            println!("\nPages:");
            for (index, page) in font.pages.iter().enumerate() {
                println!("  {}. {}", index, page.name);
            }

            println!("\nStatistics:");
            println!("  Glyphs: {}", font.glyphs.len());
            println!("  Kerning pairs: {}", font.kernings.len());

            let mut ids: Vec<u32> = font.glyphs.keys().copied().collect();
            ids.sort_unstable();

            println!("\nSample Glyphs (first 10):");
            for id in ids.iter().take(10) {
                if let Some(glyph) = font.glyph(*id) {
                    println!(
                        "  id {:4}: {}x{} at ({}, {}), advance {}",
                        id, glyph.width, glyph.height, glyph.x, glyph.y, glyph.xadvance
                    );
                }
            }
            if ids.len() > 10 {
                println!("  ... and {} more", ids.len() - 10);
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to decode BMFont file");
            eprintln!("  {}", e);
            process::exit(1);
        }
    }
}
