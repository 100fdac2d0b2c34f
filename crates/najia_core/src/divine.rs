//! One-shot divination: day, hexagram, changes, interactions, use-god.

use najia_tables::classify_kinship;
use najia_time::{DayInfo, resolve_day, resolve_void};

use crate::assign::analyze;
use crate::error::NajiaError;
use crate::interaction::evaluate_interactions;
use crate::report_types::{
    ChangedReport, DivinationReport, DivinationRequest, HexagramReport, LineChange, LineSnapshot,
};
use crate::resolver::{
    MovingLines, changed_hexagram_name, hexagram_from_lines, interlocking_hexagram,
};
use crate::use_god::use_god_report;

/// Analyse the hexagram reached through `moving` and record each line's change.
pub fn changed_report(
    primary: &HexagramReport,
    moving: &MovingLines,
    day: &DayInfo,
) -> Result<ChangedReport, NajiaError> {
    let changed = changed_hexagram_name(primary.name, moving);
    let hexagram = changed.hexagram().ok_or_else(|| {
        NajiaError::Lookup(format!("{} changed by {:?}", primary.name, moving.to_vec()))
    })?;
    let report = analyze(hexagram.name, day)?;

    let changes = moving
        .iter()
        .filter_map(|position| {
            let before = primary.line(position)?;
            let after = report.line(position)?;
            Some(LineChange {
                position,
                position_name: before.position_name,
                before: before.into(),
                after: LineSnapshot::from(after),
                relation_to_primary: classify_kinship(after.element, primary.palace_element),
            })
        })
        .collect();

    Ok(ChangedReport { report, changes })
}

/// Run the whole analysis for one request. Returns a complete report or an error.
pub fn divine(request: &DivinationRequest) -> Result<DivinationReport, NajiaError> {
    let day = resolve_day(request.date);
    let voids = resolve_void(day.stem, day.branch)?;

    let primary_name = hexagram_from_lines(request.lines);
    let hexagram = primary_name
        .hexagram()
        .ok_or_else(|| NajiaError::Lookup(request.lines.to_string()))?;
    let primary = analyze(hexagram.name, &day)?;

    let changed = if request.moving.is_empty() {
        None
    } else {
        Some(changed_report(&primary, &request.moving, &day)?)
    };

    let interactions = evaluate_interactions(&primary.lines, day.branch, day.month_branch);
    let use_god = request.topic.map(|topic| use_god_report(&primary, topic));

    tracing::info!(
        date = %day.date,
        pillar = %day.pillar(),
        primary = primary.name,
        changed = changed.as_ref().map(|c| c.report.name),
        "divination complete"
    );

    Ok(DivinationReport {
        day,
        voids,
        interlocking: interlocking_hexagram(request.lines).name(),
        moving: request.moving.to_vec(),
        primary,
        changed,
        interactions,
        use_god,
    })
}
