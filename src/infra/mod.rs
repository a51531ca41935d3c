// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that actually touches the disk:
//
//   local_fs.rs     — LocalFs implements the domain traits
//                     (ArtifactProbe, ArtifactCopier,
//                     ReportSink) on the real filesystem.
//                     Reports are written atomically: the
//                     rendered text goes to a uniquely named
//                     temp file (tempfile) in the same
//                     directory, renamed over the target.
//
//   config_store.rs — ReportConfig persistence as JSON, so
//                     token lists can be edited between runs
//                     instead of being edited in code.

/// Filesystem probe, copy and atomic report writer
pub mod local_fs;

/// ReportConfig JSON saving and loading
pub mod config_store;
