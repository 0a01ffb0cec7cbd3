//! Read-only views over the KPI, pillar and checklist datasets
//!
//! These only reshape what the data files already contain (counts, lists);
//! no ratio or regulatory formula is computed here.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::dataset::DatasetId;
use crate::error::{Error, Result};

/// KPI categories that feed the status summary, in display order
pub const KPI_CATEGORIES: [&str; 4] = [
    "capital_ratios",
    "liquidity_ratios",
    "risk_metrics",
    "performance_metrics",
];

/// Human label for a KPI category key
pub fn category_label(category: &str) -> &str {
    match category {
        "capital_ratios" => "Ratios de capital",
        "liquidity_ratios" => "Ratios de liquidité",
        "risk_metrics" => "Métriques de risque",
        "performance_metrics" => "Performance",
        other => other,
    }
}

// ─────────────────────────────────────────────────────────────────
// KPI status summary
// ─────────────────────────────────────────────────────────────────

/// Traffic-light status of a KPI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiStatus {
    Green,
    Orange,
    Red,
    Unknown,
}

impl KpiStatus {
    /// Parse the `status` field; an absent field counts as green
    pub fn from_field(field: Option<&str>) -> Self {
        match field {
            None | Some("green") => KpiStatus::Green,
            Some("orange") => KpiStatus::Orange,
            Some("red") => KpiStatus::Red,
            Some(_) => KpiStatus::Unknown,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            KpiStatus::Green => "status-green",
            KpiStatus::Orange => "status-orange",
            KpiStatus::Red => "status-red",
            KpiStatus::Unknown => "status-unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KpiStatus::Green => "CONFORME",
            KpiStatus::Orange => "SURVEILLANCE",
            KpiStatus::Red => "ALERTE",
            KpiStatus::Unknown => "N/D",
        }
    }
}

/// Count of KPIs per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub green: usize,
    pub orange: usize,
    pub red: usize,
    pub unknown: usize,
}

impl StatusSummary {
    pub fn total(&self) -> usize {
        self.green + self.orange + self.red + self.unknown
    }

    fn record(&mut self, status: KpiStatus) {
        match status {
            KpiStatus::Green => self.green += 1,
            KpiStatus::Orange => self.orange += 1,
            KpiStatus::Red => self.red += 1,
            KpiStatus::Unknown => self.unknown += 1,
        }
    }
}

/// One KPI line of a category table
#[derive(Debug, Clone, PartialEq)]
pub struct KpiRow {
    pub name: String,
    pub value: String,
    pub status: KpiStatus,
}

/// Count KPI statuses across [`KPI_CATEGORIES`]
///
/// Categories missing from the document are skipped.
pub fn kpi_status_summary(kpi: &Value) -> Result<StatusSummary> {
    let mut summary = StatusSummary::default();
    for category in KPI_CATEGORIES {
        for row in kpi_rows(kpi, category)? {
            summary.record(row.status);
        }
    }
    Ok(summary)
}

/// Rows of one KPI category, sorted by KPI name
pub fn kpi_rows(kpi: &Value, category: &str) -> Result<Vec<KpiRow>> {
    let root = kpi
        .as_object()
        .ok_or_else(|| Error::dataset(DatasetId::Kpi.name(), "top level is not an object"))?;

    let Some(entries) = root.get(category) else {
        return Ok(Vec::new());
    };
    let entries = entries.as_object().ok_or_else(|| {
        Error::dataset(
            DatasetId::Kpi.name(),
            format!("category '{}' is not an object", category),
        )
    })?;

    Ok(entries
        .iter()
        .map(|(name, entry)| KpiRow {
            name: name.clone(),
            value: entry.get("value").map(display_scalar).unwrap_or_default(),
            status: KpiStatus::from_field(entry.get("status").and_then(Value::as_str)),
        })
        .collect())
}

// ─────────────────────────────────────────────────────────────────
// Checklist completion
// ─────────────────────────────────────────────────────────────────

/// One pillar of `checklist_data.json`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ChecklistPillar {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tasks: Vec<ChecklistTask>,
}

/// One checklist task
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ChecklistTask {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub responsible: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    priority: Option<String>,
}

/// Task priority as written in the checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Parse a `priority` field or query value; anything else is `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "🔴 Haute",
            Priority::Medium => "🟡 Moyenne",
            Priority::Low => "🟢 Basse",
        }
    }
}

/// Where a task stands
///
/// An open task with high or medium priority counts as in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    InProgress,
    Todo,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "✅ Terminée",
            TaskStatus::InProgress => "🔄 En cours",
            TaskStatus::Todo => "⏳ À faire",
        }
    }
}

impl ChecklistTask {
    pub fn title(&self) -> &str {
        self.task.as_deref().unwrap_or("Tâche sans titre")
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority.as_deref().and_then(Priority::parse)
    }

    pub fn status(&self) -> TaskStatus {
        if self.completed {
            TaskStatus::Completed
        } else if matches!(self.priority(), Some(Priority::High | Priority::Medium)) {
            TaskStatus::InProgress
        } else {
            TaskStatus::Todo
        }
    }
}

/// Task counts per [`TaskStatus`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskBreakdown {
    pub completed: usize,
    pub in_progress: usize,
    pub todo: usize,
}

impl TaskBreakdown {
    pub fn total(&self) -> usize {
        self.completed + self.in_progress + self.todo
    }
}

/// Status choices of the task list filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    /// Every task not completed, in progress included
    Open,
    InProgress,
    Completed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Open,
        StatusFilter::InProgress,
        StatusFilter::Completed,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(StatusFilter::All),
            "open" => Some(StatusFilter::Open),
            "in_progress" => Some(StatusFilter::InProgress),
            "completed" => Some(StatusFilter::Completed),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Open => "open",
            StatusFilter::InProgress => "in_progress",
            StatusFilter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Tous",
            StatusFilter::Open => "À faire",
            StatusFilter::InProgress => "En cours",
            StatusFilter::Completed => "Terminées",
        }
    }

    fn accepts(&self, task: &ChecklistTask) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Open => !task.completed,
            StatusFilter::InProgress => task.status() == TaskStatus::InProgress,
            StatusFilter::Completed => task.completed,
        }
    }
}

/// Status and priority filter over a pillar's tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: StatusFilter,
    /// `None` keeps every priority
    pub priority: Option<Priority>,
}

impl TaskFilter {
    pub fn accepts(&self, task: &ChecklistTask) -> bool {
        self.status.accepts(task)
            && self.priority.map_or(true, |p| task.priority() == Some(p))
    }
}

impl ChecklistPillar {
    /// Title to show, falling back to the pillar key
    pub fn display_title<'a>(&'a self, pillar_id: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(pillar_id)
    }

    pub fn completion(&self) -> Completion {
        Completion {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|t| t.completed).count(),
        }
    }

    pub fn breakdown(&self) -> TaskBreakdown {
        let mut breakdown = TaskBreakdown::default();
        for task in &self.tasks {
            match task.status() {
                TaskStatus::Completed => breakdown.completed += 1,
                TaskStatus::InProgress => breakdown.in_progress += 1,
                TaskStatus::Todo => breakdown.todo += 1,
            }
        }
        breakdown
    }

    /// Tasks accepted by `filter`, in checklist order
    pub fn filtered(&self, filter: &TaskFilter) -> Vec<&ChecklistTask> {
        self.tasks.iter().filter(|t| filter.accepts(t)).collect()
    }
}

/// Completed vs total tasks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Completion {
    pub total: usize,
    pub completed: usize,
}

impl Completion {
    /// Percentage done; 0 when there are no tasks
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }

    pub fn level(&self) -> CompletionLevel {
        CompletionLevel::from_percentage(self.percentage())
    }
}

/// Completion band of a pillar card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionLevel {
    /// 75% and above
    Advanced,
    /// 50% to 75%
    Halfway,
    /// 25% to 50%
    Started,
    /// Below 25%
    Behind,
}

impl CompletionLevel {
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 75.0 {
            CompletionLevel::Advanced
        } else if pct >= 50.0 {
            CompletionLevel::Halfway
        } else if pct >= 25.0 {
            CompletionLevel::Started
        } else {
            CompletionLevel::Behind
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CompletionLevel::Advanced => "🟢",
            CompletionLevel::Halfway => "🟡",
            CompletionLevel::Started => "🟠",
            CompletionLevel::Behind => "🔴",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CompletionLevel::Advanced => "level-advanced",
            CompletionLevel::Halfway => "level-halfway",
            CompletionLevel::Started => "level-started",
            CompletionLevel::Behind => "level-behind",
        }
    }
}

/// Per-pillar and overall checklist completion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionStats {
    pub pillars: BTreeMap<String, Completion>,
    pub overall: Completion,
}

/// Parse `checklist_data.json` (`{ pillar_id: { title, tasks: [...] } }`),
/// ordered by pillar key
pub fn checklist(checklist: &Value) -> Result<BTreeMap<String, ChecklistPillar>> {
    serde_json::from_value(checklist.clone())
        .map_err(|e| Error::dataset(DatasetId::Checklist.name(), e.to_string()))
}

/// Tally completed tasks per pillar and overall
pub fn completion_stats(checklist_data: &Value) -> Result<CompletionStats> {
    let mut stats = CompletionStats::default();
    for (pillar_id, pillar) in checklist(checklist_data)? {
        let completion = pillar.completion();
        stats.overall.total += completion.total;
        stats.overall.completed += completion.completed;
        stats.pillars.insert(pillar_id, completion);
    }
    Ok(stats)
}

/// An open high-priority task with the pillar it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityAction {
    pub pillar_id: String,
    pub pillar_title: String,
    pub task: ChecklistTask,
}

/// The first `limit` open high-priority tasks, by pillar key then checklist order
pub fn top_priority_actions(checklist_data: &Value, limit: usize) -> Result<Vec<PriorityAction>> {
    let mut actions = Vec::new();
    for (pillar_id, pillar) in checklist(checklist_data)? {
        let pillar_title = pillar.display_title(&pillar_id).to_string();
        for task in pillar.tasks {
            if actions.len() == limit {
                return Ok(actions);
            }
            if !task.completed && task.priority() == Some(Priority::High) {
                actions.push(PriorityAction {
                    pillar_id: pillar_id.clone(),
                    pillar_title: pillar_title.clone(),
                    task,
                });
            }
        }
    }
    Ok(actions)
}

// ─────────────────────────────────────────────────────────────────
// Pillars
// ─────────────────────────────────────────────────────────────────

/// A governance pillar as listed in `pillars_data.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PillarSummary {
    /// Key without the `pillar_` prefix
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// List pillars keyed `pillar_<id>`, ordered by key
pub fn pillars(data: &Value) -> Result<Vec<PillarSummary>> {
    let root = data
        .as_object()
        .ok_or_else(|| Error::dataset(DatasetId::Pillars.name(), "top level is not an object"))?;

    Ok(root
        .iter()
        .filter_map(|(key, entry)| {
            let id = key.strip_prefix("pillar_")?;
            let name = ["name", "title"]
                .iter()
                .find_map(|k| entry.get(*k).and_then(Value::as_str))
                .unwrap_or(id)
                .to_string();
            Some(PillarSummary {
                id: id.to_string(),
                name,
                description: entry
                    .get("description")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            })
        })
        .collect())
}

// ─────────────────────────────────────────────────────────────────
// Generic listing
// ─────────────────────────────────────────────────────────────────

/// Top-level scalar fields of an object document, as display strings
///
/// Nested objects/arrays are summarized by their size.
pub fn top_level_fields(data: &Value) -> Vec<(String, String)> {
    let Some(root) = data.as_object() else {
        return Vec::new();
    };
    root.iter()
        .map(|(key, value)| {
            let shown = match value {
                Value::Array(items) => format!("[{} éléments]", items.len()),
                Value::Object(fields) => format!("{{{} champs}}", fields.len()),
                scalar => display_scalar(scalar),
            };
            (key.clone(), shown)
        })
        .collect()
}

fn display_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{:.2}", f),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
