use serde::Serialize;

use crate::models::booking::serialize_booking_id;

// Приоритет посадки: чем дальше от входа самый дальний ряд брони,
// тем раньше пассажир заходит в салон
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    Highest,
    High,
    Medium,
    Low,
}

impl Priority {
    // Пороги по дальнему ряду (включительно, выигрывает верхняя полоса)
    pub fn from_row(row: u32) -> Priority {
        if row >= 16 {
            Priority::Highest
        } else if row >= 11 {
            Priority::High
        } else if row >= 6 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Highest => "Highest",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

// Строка итоговой последовательности; seq назначается после глобальной
// сортировки, поэтому это свойство всей последовательности
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceRow {
    #[serde(serialize_with = "serialize_booking_id")]
    pub booking_id: f64,
    pub seats: Vec<String>,
    pub max_row: u32,
    pub priority: Priority,
    pub seq: usize,
}
