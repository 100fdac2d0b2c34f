//! Text rendering of reports.

use std::fmt::Write;

use najia_core::{
    ChangedReport, DivinationReport, HexagramReport, InteractionReport, LineRole, UseGodReport,
};
use najia_tables::{Branch, Palace, hexagram_by_name};
use najia_time::DayInfo;

fn join_branches(branches: &[Branch]) -> String {
    branches
        .iter()
        .map(|b| b.name())
        .collect::<Vec<_>>()
        .join("、")
}

/// Day pillar, elements, month branch and voids.
pub fn render_day(day: &DayInfo, voids: [Branch; 2]) -> String {
    format!(
        "{}  {}日 (日干五行 {})  月建 {} ({})  空亡 {}",
        day.date,
        day.pillar(),
        day.day_element,
        day.month_branch,
        day.month_element(),
        join_branches(&voids)
    )
}

/// Line table, top line first.
pub fn render_chart(report: &HexagramReport, moving: &[u8]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "【{}】 {} (五行 {})",
        report.name,
        report.placement(),
        report.palace_element
    );
    let _ = writeln!(
        out,
        "  {:<4}{:<8}{:<3}{:<4}{:<2}{:<3}{:<4}{:<4}{:<3}{:<4}",
        "爻位", "伏神", "世應", "陰陽", "動", "空", "六神", "納甲", "五行", "六親"
    );
    for line in report.lines.iter().rev() {
        let hidden = line
            .hidden
            .map(|h| format!("{}{}{}", h.relation, h.stem, h.branch))
            .unwrap_or_default();
        let role = line.role.map(LineRole::name).unwrap_or("");
        let moving_mark = if moving.contains(&line.position) { "●" } else { "" };
        let void_mark = if line.is_void { "空" } else { "" };
        let _ = writeln!(
            out,
            "  {:<4}{:<8}{:<3}{:<4}{:<2}{:<3}{:<4}{:<4}{:<3}{:<4}",
            line.position_name,
            hidden,
            role,
            line.yao.glyph(),
            moving_mark,
            void_mark,
            line.spirit.name(),
            format!("{}{}", line.stem, line.branch),
            line.element.name(),
            line.relation.name()
        );
    }
    out
}

/// Moving-line deltas.
pub fn render_changes(changed: &ChangedReport) -> String {
    let mut out = format!("變卦【{}】 {}\n", changed.report.name, changed.report.placement());
    for c in &changed.changes {
        let _ = writeln!(
            out,
            "  {} {}{}{} → {}{}{} (本宮 {})",
            c.position_name,
            c.before.relation,
            c.before.stem,
            c.before.branch,
            c.after.relation,
            c.after.stem,
            c.after.branch,
            c.relation_to_primary
        );
    }
    out
}

/// Per-line tags and the whole-hexagram pattern.
pub fn render_interactions(report: &InteractionReport, lines: &HexagramReport) -> String {
    let mut out = String::new();
    if let Some(special) = report.special {
        let _ = writeln!(out, "特象: {}", special.name());
    }
    for interaction in report.lines.iter().rev() {
        let name = lines
            .line(interaction.position)
            .map(|l| l.position_name)
            .unwrap_or_default();
        let _ = writeln!(out, "  {} {}", name, interaction.tags().join(" "));
    }
    out
}

/// Use-god lines for a topic.
pub fn render_use_god(report: &UseGodReport) -> String {
    let targets: Vec<&str> = report.targets.iter().map(|k| k.name()).collect();
    let mut out = format!(
        "用神 ({}: {}) {}\n",
        report.topic,
        targets.join("、"),
        report.guide
    );
    if report.lines.is_empty() {
        out.push_str("  (無)\n");
    }
    for line in &report.lines {
        let _ = writeln!(
            out,
            "  {} {}{}{} {}{}",
            line.position_name,
            line.relation,
            line.stem,
            line.branch,
            line.element,
            if line.hidden { " (伏)" } else { "" }
        );
    }
    out
}

/// One-line summary: day, primary, changed and interlocking names.
pub fn summary(report: &DivinationReport) -> String {
    let mut s = format!("{}日 {}", report.day.pillar(), report.primary.name);
    if let Some(changed) = &report.changed {
        let _ = write!(s, " → {}", changed.report.name);
    }
    let _ = write!(s, " (互 {})", report.interlocking);
    s
}

/// Full text report.
pub fn render_divination(report: &DivinationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", summary(report));
    let _ = writeln!(out, "{}\n", render_day(&report.day, report.voids));
    out.push_str(&render_chart(&report.primary, &report.moving));
    out.push('\n');
    if let Some(changed) = &report.changed {
        out.push_str(&render_changes(changed));
        out.push('\n');
    }
    out.push_str(&render_interactions(&report.interactions, &report.primary));
    if let Some(use_god) = &report.use_god {
        out.push('\n');
        out.push_str(&render_use_god(use_god));
    }
    out
}

/// A palace's eight members with generation and self line.
pub fn render_palace(palace: &Palace) -> String {
    let mut out = format!("{}宮 (五行 {})\n", palace.trigram.name(), palace.element());
    for name in palace.members {
        let Some(generation) = palace.generation_of(name) else {
            continue;
        };
        let number = hexagram_by_name(name).map(|h| h.number).unwrap_or_default();
        let _ = writeln!(
            out,
            "  {:<6}{:<6} 世{} 應{}  #{}",
            generation.name(),
            name,
            generation.self_line(),
            generation.counterpart_line(),
            number
        );
    }
    out
}
