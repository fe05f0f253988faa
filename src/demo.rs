// ── Demo sequence ─────────────────────────────────────────────────────────────
//
// The start-up script of the application: show a URI twice, build two
// coordinates, and measure the distance between them.  Dialogs go through a
// `MessageSink` so the sequence runs unchanged under test.

use url::Url;

use crate::{config::DemoConfig, coord::Coord, error::Result, platform::MessageSink};

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    /// Normalised absolute form of the configured URI.
    pub absolute_uri: String,
    pub a: Coord,
    pub b: Coord,
    pub a_str: String,
    pub b_str: String,
    /// Euclidean distance from `a` to `b`.
    pub distance: f64,
}

/// Run the demo against `sink`.
///
/// Fails before showing anything if `config.uri` is not an absolute URI; a
/// failing dialog aborts the run with its error.
pub fn run(config: &DemoConfig, sink: &dyn MessageSink) -> Result<DemoReport> {
    let uri = Url::parse(&config.uri)?;
    let absolute_uri = uri.as_str().to_owned();

    sink.show(&config.title, &absolute_uri)?;

    let a = config.a;
    let b = config.b;

    sink.show(&config.title, &absolute_uri)?;

    let a_str = a.to_string();
    let b_str = b.to_string();
    let distance = a.distance(&b);
    log::debug!("a = {a_str}, b = {b_str}, |ab| = {distance}");

    Ok(DemoReport {
        absolute_uri,
        a,
        b,
        a_str,
        b_str,
        distance,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
