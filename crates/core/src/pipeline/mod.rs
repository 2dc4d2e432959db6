//! Fetch-and-convert pipeline for the generated font header.

mod clean;
mod convert;
mod fetch;

pub use clean::clean;
pub use convert::{Converter, FontconvertTool};
pub use fetch::{Fetcher, HttpFetcher, ensure_cached};

use std::{
    fs::{File, create_dir_all, remove_file},
    io::Write,
    path::PathBuf,
    time::Instant,
};

use crate::{config::FontSpec, error::Result};

/// Paths for one header generation run.
pub struct GenerateContext {
    pub resources_dir: PathBuf,
    pub output: PathBuf,
}

impl GenerateContext {
    pub fn new(resources_dir: PathBuf, output: PathBuf) -> Self {
        Self {
            resources_dir,
            output,
        }
    }

    /// Deterministic cache path for a spec's TTF.
    pub fn cache_path(&self, spec: &FontSpec) -> PathBuf {
        self.resources_dir.join(spec.cache_file_name())
    }
}

/// Counters reported after a successful run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Fonts retrieved over the network this run.
    pub fetched: usize,
    /// Fonts served from the resources cache.
    pub cached: usize,
    /// Conversion tool invocations.
    pub conversions: usize,
}

/// Generate the font header for `fonts`, in declaration order.
///
/// Ensures the resources directory exists, removes any pre-existing file at
/// the output path, then for each spec ensures a cached TTF and appends one
/// conversion per requested size to the header. The artifact's byte content
/// is the exact concatenation of the tool's output in table-then-size order,
/// with no separators.
///
/// A failed run removes the partial header before the error propagates, so a
/// truncated artifact is never left where a complete one is expected. The
/// fetched fonts stay cached for the next attempt.
pub fn generate(
    ctx: &GenerateContext,
    fonts: &[FontSpec],
    fetcher: &dyn Fetcher,
    converter: &dyn Converter,
) -> Result<GenerateSummary> {
    create_dir_all(&ctx.resources_dir)?;
    if let Some(parent) = ctx.output.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    if ctx.output.exists() {
        remove_file(&ctx.output)?;
    }

    let start = Instant::now();
    let mut header = File::create(&ctx.output)?;

    match convert_all(ctx, fonts, fetcher, converter, &mut header) {
        Ok(summary) => {
            header.flush()?;
            println!(
                "Fonts converted in {:.2}s ({} conversions, {} downloaded, {} cached)",
                start.elapsed().as_secs_f64(),
                summary.conversions,
                summary.fetched,
                summary.cached,
            );
            println!("  Output: {}", ctx.output.display());
            Ok(summary)
        }
        Err(e) => {
            drop(header);
            let _ = remove_file(&ctx.output);
            Err(e)
        }
    }
}

fn convert_all(
    ctx: &GenerateContext,
    fonts: &[FontSpec],
    fetcher: &dyn Fetcher,
    converter: &dyn Converter,
    header: &mut dyn Write,
) -> Result<GenerateSummary> {
    let mut summary = GenerateSummary::default();

    for spec in fonts {
        let (ttf, fetched) = ensure_cached(spec, &ctx.resources_dir, fetcher)?;
        if fetched {
            summary.fetched += 1;
        } else {
            summary.cached += 1;
        }

        for &size in spec.sizes {
            println!("Converting {} {} {size}...", spec.typeface, spec.weight);
            converter.convert(&ttf, size, header)?;
            summary.conversions += 1;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        fs::{read, write},
        path::Path,
    };

    use super::*;
    use crate::{error::Error, testutil::TestDir};

    /// Fetcher that writes fixed bytes and counts its calls.
    struct FakeFetcher {
        calls: Cell<usize>,
    }

    impl FakeFetcher {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl Fetcher for FakeFetcher {
        fn fetch(&self, _url: &str, dest: &Path) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            write(dest, b"ttf-bytes")?;
            Ok(())
        }
    }

    /// Converter that emits a recognizable marker per invocation.
    struct FakeConverter {
        invocations: RefCell<Vec<(String, u32)>>,
        fail_at: Option<usize>,
    }

    impl FakeConverter {
        fn new() -> Self {
            Self {
                invocations: RefCell::new(Vec::new()),
                fail_at: None,
            }
        }

        fn failing_at(index: usize) -> Self {
            Self {
                invocations: RefCell::new(Vec::new()),
                fail_at: Some(index),
            }
        }
    }

    impl Converter for FakeConverter {
        fn convert(&self, ttf: &Path, size: u32, out: &mut dyn Write) -> Result<()> {
            let name = ttf.file_name().unwrap().to_str().unwrap().to_string();
            let index = self.invocations.borrow().len();
            self.invocations.borrow_mut().push((name.clone(), size));
            if self.fail_at == Some(index) {
                return Err(Error::Conversion {
                    path: ttf.to_path_buf(),
                    size,
                    message: "exited with exit status: 1".into(),
                });
            }
            write!(out, "<{name}@{size}>")?;
            Ok(())
        }
    }

    const TABLE: &[FontSpec] = &[
        FontSpec {
            typeface: "Alpha",
            weight: "Regular",
            sizes: &[16],
            url: "https://example.invalid/Alpha-Regular.ttf",
        },
        FontSpec {
            typeface: "Beta",
            weight: "Bold",
            sizes: &[16, 24],
            url: "https://example.invalid/Beta-Bold.ttf",
        },
    ];

    fn ctx(dir: &TestDir) -> GenerateContext {
        GenerateContext::new(dir.path().join("resources"), dir.path().join("Fonts.h"))
    }

    #[test]
    fn test_output_is_exact_concatenation_in_declared_order() {
        let dir = TestDir::new("concat");
        let ctx = ctx(&dir);
        let converter = FakeConverter::new();

        let summary = generate(&ctx, TABLE, &FakeFetcher::new(), &converter).unwrap();

        let header = read(&ctx.output).unwrap();
        assert_eq!(
            header,
            b"<Alpha-Regular.ttf@16><Beta-Bold.ttf@16><Beta-Bold.ttf@24>"
        );
        assert_eq!(summary.conversions, 3);
        assert_eq!(summary.fetched, 2);
    }

    #[test]
    fn test_rerun_with_populated_cache_is_deterministic() {
        let dir = TestDir::new("rerun");
        let ctx = ctx(&dir);
        let fetcher = FakeFetcher::new();

        generate(&ctx, TABLE, &fetcher, &FakeConverter::new()).unwrap();
        let first = read(&ctx.output).unwrap();

        let summary = generate(&ctx, TABLE, &fetcher, &FakeConverter::new()).unwrap();
        let second = read(&ctx.output).unwrap();

        assert_eq!(first, second);
        assert_eq!(fetcher.calls.get(), 2, "second run must not re-fetch");
        assert_eq!(summary.fetched, 0);
        assert_eq!(summary.cached, 2);
    }

    #[test]
    fn test_preexisting_output_is_replaced_not_appended() {
        let dir = TestDir::new("replace");
        let ctx = ctx(&dir);
        write(&ctx.output, b"stale header from a previous run").unwrap();

        generate(&ctx, TABLE, &FakeFetcher::new(), &FakeConverter::new()).unwrap();

        let header = read(&ctx.output).unwrap();
        assert_eq!(
            header,
            b"<Alpha-Regular.ttf@16><Beta-Bold.ttf@16><Beta-Bold.ttf@24>"
        );
    }

    #[test]
    fn test_conversion_failure_aborts_before_later_records() {
        let dir = TestDir::new("abort");
        let ctx = ctx(&dir);
        let converter = FakeConverter::failing_at(0);

        let err = generate(&ctx, TABLE, &FakeFetcher::new(), &converter).unwrap_err();
        assert!(matches!(err, Error::Conversion { size: 16, .. }));

        let invocations = converter.invocations.borrow();
        assert_eq!(invocations.len(), 1, "Beta must never be converted");
        assert_eq!(invocations[0], ("Alpha-Regular.ttf".to_string(), 16));
    }

    #[test]
    fn test_failed_run_leaves_no_partial_artifact() {
        let dir = TestDir::new("partial");
        let ctx = ctx(&dir);
        let converter = FakeConverter::failing_at(1);

        generate(&ctx, TABLE, &FakeFetcher::new(), &converter).unwrap_err();

        assert!(!ctx.output.exists(), "partial header must be removed");
        assert!(
            ctx.cache_path(&TABLE[0]).exists(),
            "fetched fonts stay cached for the next attempt"
        );
    }

    #[test]
    fn test_empty_table_produces_empty_artifact() {
        let dir = TestDir::new("empty");
        let ctx = ctx(&dir);

        let summary = generate(&ctx, &[], &FakeFetcher::new(), &FakeConverter::new()).unwrap();

        assert_eq!(summary, GenerateSummary::default());
        assert_eq!(read(&ctx.output).unwrap(), b"");
    }
}
