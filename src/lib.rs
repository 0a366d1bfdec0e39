#![doc = r##"
sarif-split — split multi-run SARIF logs into upload-sized pieces.

Code scanning services cap the number of runs they accept per SARIF file
(GitHub Code Scanning allows 20). Aggregating analyzers routinely emit one run
per underlying tool and can exceed that limit. This crate rewrites such a log
into several SARIF files, each holding a single run (default) or a bounded
chunk of runs, and powers the `sarif-split` CLI.

Policies
--------
- `SplitPolicy::PerRun`: one run per file, named `results-<NN>-<tool>.sarif`.
  Each run gets `automationDetails.id = "<prefix>/<tool>/<index>"` so the
  consumer treats every file as its own analysis category.
- `SplitPolicy::Chunked`: at most `max_runs_per_file` runs per file, named
  `results-<k>.sarif`, with runs left untouched.

All top-level keys other than `runs` are copied to every output unchanged and
in their original order.

Quick start: split a file
-------------------------
```rust,no_run
use std::path::Path;
use sarif_split::{split_sarif_file, SplitParams};

fn main() -> sarif_split::Result<()> {
    let report = split_sarif_file(
        Path::new("results.sarif"),
        Path::new("sarif-output"),
        &SplitParams::default(),
    )?;

    for file in &report.files {
        println!("{}", file.path.display());
    }
    Ok(())
}
```

Plan a split in memory
----------------------
```rust
use std::path::Path;
use sarif_split::{parse_sarif, plan_split, SplitParams};

fn main() -> sarif_split::Result<()> {
    let doc = parse_sarif(
        r#"{"version": "2.1.0", "runs": [{"tool": {"driver": {"name": "ESLint"}}}]}"#,
        Path::new("inline.sarif"),
    )?;

    let groups = plan_split(doc, &SplitParams::default())?.unwrap_or_default();
    assert_eq!(groups[0].file_name, "results-01-ESLint.sarif");
    assert_eq!(groups[0].document["runs"][0]["automationDetails"]["id"], "codacy/ESLint/1");
    Ok(())
}
```

Error handling
--------------
All public functions return `sarif_split::Result<T>`; match on `sarif_split::Error`
to handle specific cases. A document without a `runs` key is not an error: the
returned `SplitReport` is empty and `runs_present` is `false`.

```rust,no_run
use std::path::Path;
use sarif_split::{split_sarif_file, Error, SplitParams};

fn main() {
    match split_sarif_file(Path::new("in.sarif"), Path::new("out"), &SplitParams::chunked(20)) {
        Ok(report) if report.is_empty() => eprintln!("nothing to write"),
        Ok(report) => println!("wrote {} file(s)", report.files.len()),
        Err(Error::MalformedInput { path, source }) => eprintln!("{}: {source}", path.display()),
        Err(Error::OutputWrite { path, .. }) => eprintln!("could not write {}", path.display()),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `SplitPolicy`, `OutputGroup`, `WrittenFile`, `SplitReport`.
- [`core`] — parameters, sanitization, document handling and partitioning.
- [`io`] — SARIF reader and writer.
- [`error`] — crate-level `Error` and `Result`.
"##]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::document::SarifDocument;
pub use crate::core::params::{DEFAULT_ID_PREFIX, DEFAULT_MAX_RUNS_PER_FILE, SplitParams};
pub use crate::core::sanitize::sanitize_tool_name;
pub use error::{Error, Result};
pub use types::{OutputGroup, SplitPolicy, SplitReport, WrittenFile};

pub use io::{parse_sarif, read_sarif, write_sarif};

pub use api::{plan_split, split_document_to_dir, split_sarif_file, split_sarif_file_with_progress};
