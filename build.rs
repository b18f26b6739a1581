use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_ROOT: &str = "assets/css";
const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUT_DIR: &str = "assets/dist";
const CSS_OUT: &str = "assets/dist/bundle.css";

/// Resolve the `@import` graph from `entry` into a single stylesheet
fn bundle_css(entry: &Path, minify: bool) -> Result<String, String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut sheet = bundler
        .bundle(entry)
        .map_err(|e| format!("bundle {}: {}", entry.display(), e))?;

    if minify {
        sheet
            .minify(MinifyOptions::default())
            .map_err(|e| format!("minify: {}", e))?;
    }

    let output = sheet
        .to_css(PrinterOptions {
            minify,
            ..Default::default()
        })
        .map_err(|e| format!("print: {}", e))?;

    Ok(output.code)
}

fn watch_dir(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            watch_dir(&path);
        } else if path.extension().is_some_and(|ext| ext == "css") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

fn main() {
    println!("cargo:rerun-if-changed={}", CSS_ROOT);
    watch_dir(Path::new(CSS_ROOT));

    let minify = std::env::var("PROFILE").is_ok_and(|p| p == "release");

    let css = match bundle_css(Path::new(CSS_ENTRY), minify) {
        Ok(css) => css,
        Err(e) => panic!("CSS bundling failed: {}", e),
    };

    if let Err(e) = fs::create_dir_all(CSS_OUT_DIR).and_then(|_| fs::write(CSS_OUT, css)) {
        panic!("Failed to write {}: {}", CSS_OUT, e);
    }
}
