use std::collections::HashMap;

use serde::Serialize;

use crate::models::booking::serialize_booking_id;
use crate::models::{Priority, SequenceRow};

// Колонки фиксированы форматом кода места
const COLUMNS: [char; 4] = ['A', 'B', 'C', 'D'];

// Кто сидит на месте: бронь, её позиция в очереди и приоритет
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeatInfo {
    #[serde(serialize_with = "serialize_booking_id")]
    pub booking_id: f64,
    pub seq: usize,
    pub priority: Priority,
}

// Карта занятости: код места -> бронь. Конфликты мест не детектируются,
// при дублях выигрывает более поздняя строка последовательности
pub fn seat_occupancy(rows: &[SequenceRow]) -> HashMap<String, SeatInfo> {
    let mut map = HashMap::new();
    for row in rows {
        for seat in &row.seats {
            map.insert(
                seat.to_uppercase(),
                SeatInfo {
                    booking_id: row.booking_id,
                    seq: row.seq,
                    priority: row.priority,
                },
            );
        }
    }
    map
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutCell {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<SeatInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutRow {
    pub row: u32,
    pub seats: Vec<LayoutCell>,
}

// Прямоугольная сетка салона для отрисовки: ряды 1..=bus_rows, колонки A-D,
// вход спереди у ряда 1. Места за пределами сетки (включая кривые токены)
// остаются только в карте занятости
pub fn build_layout(rows: &[SequenceRow], bus_rows: u32) -> Vec<LayoutRow> {
    let occupancy = seat_occupancy(rows);
    (1..=bus_rows)
        .map(|r| LayoutRow {
            row: r,
            seats: COLUMNS
                .iter()
                .map(|&c| {
                    let code = format!("{}{}", c, r);
                    let booking = occupancy.get(&code).copied();
                    LayoutCell { code, booking }
                })
                .collect(),
        })
        .collect()
}
