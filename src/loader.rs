use crate::error::{MmResult, MomentumError};
use crate::events::{Event, Half, Outcome, PossessionPhase, PressingZone, ResultCode};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

const COL_POSITION: &str = "Position";
const COL_DURATION: &str = "Duration";
const COL_HALF: &str = "Poolaeg";
const COL_PHASE: &str = "Põhimoment";
const COL_OUTCOME: &str = "Outcome";
const COL_RESULT: &str = "Result";
const COL_RESULT_2: &str = "Shot2";
const COL_RESULT_3: &str = "Shot3";
const COL_PRESSING: &str = "Pressing";

/// Column positions resolved from the header row.
struct Columns {
    position: usize,
    duration: usize,
    half: usize,
    phase: usize,
    outcome: usize,
    result: usize,
    result_2: Option<usize>,
    result_3: Option<usize>,
    pressing: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> MmResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                MomentumError::Validation(format!("Missing required column '{}'", name))
            })
        };

        Ok(Self {
            position: require(COL_POSITION)?,
            duration: require(COL_DURATION)?,
            half: require(COL_HALF)?,
            phase: require(COL_PHASE)?,
            outcome: require(COL_OUTCOME)?,
            result: require(COL_RESULT)?,
            result_2: find(COL_RESULT_2),
            result_3: find(COL_RESULT_3),
            pressing: find(COL_PRESSING),
        })
    }
}

/// Reads one tagging-tool export (semicolon separated, header row).
pub fn load_events<R: Read>(reader: R) -> MmResult<Vec<Event>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let cols = Columns::resolve(rdr.headers()?)?;
    let mut events = Vec::new();
    let mut unknown_codes = 0usize;

    for result in rdr.records() {
        let rec = result?;
        let row = rec.position().map_or(events.len() + 2, |p| p.line() as usize);

        let cell = |idx: usize| rec.get(idx).unwrap_or("").trim();
        let opt_cell = |idx: Option<usize>| idx.map_or("", cell);

        let event = Event {
            start_offset: parse_millis(cell(cols.position), COL_POSITION, row)?,
            duration: parse_millis(cell(cols.duration), COL_DURATION, row)?,
            half: Half::from_code(cell(cols.half), row)?,
            possession_phase: parse_phase(cell(cols.phase), &mut unknown_codes),
            outcome: parse_code::<Outcome>(cell(cols.outcome), &mut unknown_codes),
            result_primary: parse_result(cell(cols.result), &mut unknown_codes),
            result_secondary: parse_result(opt_cell(cols.result_2), &mut unknown_codes),
            result_tertiary: parse_result(opt_cell(cols.result_3), &mut unknown_codes),
            pressing_zone: parse_code::<PressingZone>(
                opt_cell(cols.pressing),
                &mut unknown_codes,
            ),
        };
        events.push(event);
    }

    if unknown_codes > 0 {
        warn!(
            "⚠️  {} unrecognized codes were treated as unscored.",
            unknown_codes
        );
    }
    Ok(events)
}

pub fn load_events_from_file<P: AsRef<Path>>(path: P) -> MmResult<Vec<Event>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        MomentumError::Validation(format!(
            "Could not open event export at '{}': {}",
            path.display(),
            e
        ))
    })?;
    let events = load_events(file)?;
    debug!("   -> {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Loads both halves of a fixture and concatenates them.
pub fn load_match<P1: AsRef<Path>, P2: AsRef<Path>>(
    first_half: P1,
    second_half: P2,
) -> MmResult<Vec<Event>> {
    info!("📂 Loading match: {}", first_half.as_ref().display());
    let mut events = load_events_from_file(first_half)?;

    info!("📂 Loading match: {}", second_half.as_ref().display());
    events.extend(load_events_from_file(second_half)?);

    Ok(events)
}

fn is_empty_marker(s: &str) -> bool {
    s.is_empty() || s == "-"
}

fn parse_millis(raw: &str, column: &str, row: usize) -> MmResult<Duration> {
    let ms: f64 = raw.replace(',', ".").parse().map_err(|_| {
        MomentumError::Validation(format!(
            "Row {}: column '{}' is not a number: '{}'",
            row, column, raw
        ))
    })?;
    if !ms.is_finite() || ms < 0.0 {
        return Err(MomentumError::Validation(format!(
            "Row {}: column '{}' must be a non-negative duration, got {}",
            row, column, ms
        )));
    }
    Ok(Duration::from_nanos((ms * 1_000_000.0).round() as u64))
}

// The phase column sometimes carries a description after the code ("AA EESTI ATTACK").
fn parse_phase(raw: &str, unknown: &mut usize) -> PossessionPhase {
    let code = raw.split_whitespace().next().unwrap_or("");
    code.parse().unwrap_or_else(|_| {
        debug!("Unclassified possession phase '{}'", raw);
        *unknown += 1;
        PossessionPhase::Unclassified
    })
}

fn parse_result(raw: &str, unknown: &mut usize) -> Option<ResultCode> {
    if is_empty_marker(raw) {
        return None;
    }
    Some(raw.parse().unwrap_or_else(|_| {
        debug!("Unrecognized result code '{}'", raw);
        *unknown += 1;
        ResultCode::Unrecognized
    }))
}

fn parse_code<T: std::str::FromStr>(raw: &str, unknown: &mut usize) -> Option<T> {
    if is_empty_marker(raw) {
        return None;
    }
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!("Ignoring unknown code '{}'", raw);
            *unknown += 1;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_accept_decimal_comma() {
        let d = parse_millis("1500,0", COL_POSITION, 2).unwrap();
        assert_eq!(d, Duration::from_millis(1500));
    }

    #[test]
    fn negative_millis_are_rejected() {
        assert!(parse_millis("-1", COL_DURATION, 3).is_err());
    }

    #[test]
    fn phase_with_description_is_parsed() {
        let mut unknown = 0;
        assert_eq!(
            parse_phase("DD EESTI DEFENSE", &mut unknown),
            PossessionPhase::OpponentAttack
        );
        assert_eq!(parse_phase("??", &mut unknown), PossessionPhase::Unclassified);
        assert_eq!(unknown, 1);
    }
}
