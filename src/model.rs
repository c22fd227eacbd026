use serde::{Deserialize, Serialize};

/// One expense entry as returned by the API.
#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct Expense {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: i64,
    pub category: String,
    pub date: String,
    #[serde(rename = "userId", default)]
    pub user_id: String,
}

/// Aggregated spend for a single calendar date, keyed by its
/// `YYYY-MM-DD` id.
#[derive(Clone, PartialEq, Deserialize)]
pub struct DailySummary {
    #[serde(rename = "_id")]
    pub date: String,
    #[serde(rename = "totalAmount")]
    pub total_amount: i64,
}

/// Fields the edit modal is allowed to change.
#[derive(Clone, PartialEq, Serialize)]
pub struct ExpenseUpdate {
    pub amount: i64,
    pub category: String,
    pub date: String,
}

/// Per-item modal state. The tagged union keeps "a modal is open with
/// no item" unrepresentable.
#[derive(Clone, PartialEq)]
pub enum ModalState {
    Closed,
    Viewing(Expense),
    Editing(Expense),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChartKind {
    Bar,
    Pie,
    Doughnut,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "pie" => ChartKind::Pie,
            "doughnut" => ChartKind::Doughnut,
            _ => ChartKind::Bar,
        }
    }
}

/// "1234567원" -> "1,234,567원".
pub fn format_won(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{}원", grouped)
    } else {
        format!("{}원", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn won_formatting_groups_thousands() {
        assert_eq!(format_won(0), "0원");
        assert_eq!(format_won(500), "500원");
        assert_eq!(format_won(1500), "1,500원");
        assert_eq!(format_won(1234567), "1,234,567원");
        assert_eq!(format_won(-42000), "-42,000원");
    }

    #[test]
    fn chart_kind_round_trips_through_select_values() {
        for kind in [ChartKind::Bar, ChartKind::Pie, ChartKind::Doughnut] {
            assert_eq!(ChartKind::from_str(kind.as_str()), kind);
        }
        assert_eq!(ChartKind::from_str("unknown"), ChartKind::Bar);
    }
}
