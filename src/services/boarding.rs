//! boarding.rs
//!
//! Ядро генератора последовательности посадки.
//!
//! Включает в себя следующую функциональность:
//! - Разбор CSV/текста с бронированиями (терпимый к кривым строкам).
//! - Расчёт самого дальнего ряда каждой брони и приоритета посадки.
//! - Сортировка: дальний ряд по убыванию, затем id по возрастанию.
//! - Оценка общего времени посадки.
//!
//! Все функции чистые и синхронные, состояния между вызовами нет.

use serde::Serialize;
use thiserror::Error;

use crate::models::{Booking, Priority, SeatCode, SequenceRow};

// Канонический пример из формы ввода
pub const SAMPLE_INPUT: &str = "Booking_ID,Seats\n101,A1,B1\n120,A20,C2\n105,B10\n108,C18,D18";

const HEADER_MARKER: &str = "booking_id";

// Почему строка не попала в разбор. Плохая строка не прерывает
// обработку остальных - она просто фиксируется в отчёте
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum SkipReason {
    #[error("line has an id but no seat tokens")]
    MissingSeats,
    #[error("booking id is not a finite number")]
    InvalidBookingId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedLine {
    // 1-based номер строки в исходном тексте
    pub line: usize,
    pub raw: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseReport {
    pub bookings: Vec<Booking>,
    pub skipped: Vec<SkippedLine>,
}

/* ---------- PARSER ---------- */

// Разбор текста, где каждая строка: Booking_ID,Seat[,Seat...].
// Первая строка, начинающаяся с "booking_id" (без учёта регистра),
// считается заголовком и отбрасывается. Проверка - по префиксу строки,
// как в исходной версии: строка данных с id вида "booking_id..." тоже
// будет съедена как заголовок.
pub fn parse_with_report(input: &str) -> ParseReport {
    let lines: Vec<(usize, &str)> = input
        .split('\n')
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .collect();

    let data = match lines.first() {
        Some((_, first)) if first.to_lowercase().starts_with(HEADER_MARKER) => &lines[1..],
        _ => &lines[..],
    };

    let mut report = ParseReport::default();
    for &(line_no, line) in data {
        let parts: Vec<&str> = line
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        // нужен id и хотя бы одно место
        if parts.len() < 2 {
            report.skipped.push(SkippedLine {
                line: line_no,
                raw: line.to_string(),
                reason: SkipReason::MissingSeats,
            });
            continue;
        }

        let booking_id: f64 = match parts[0].parse() {
            Ok(v) if f64::is_finite(v) => v,
            _ => {
                report.skipped.push(SkippedLine {
                    line: line_no,
                    raw: line.to_string(),
                    reason: SkipReason::InvalidBookingId,
                });
                continue;
            }
        };

        // места сохраняем как есть, только приводим к верхнему регистру
        let seats = parts[1..].iter().map(|s| s.to_uppercase()).collect();
        report.bookings.push(Booking { booking_id, seats });
    }
    report
}

// Упрощённый best-effort вид: только удачно разобранные брони
pub fn parse_bookings(input: &str) -> Vec<Booking> {
    parse_with_report(input).bookings
}

/* ---------- SEQUENCER ---------- */

// Самый дальний ряд брони: свёртка по типизированным кодам мест,
// 0 если ни одно место не распарсилось
fn farthest_row(seats: &[String]) -> u32 {
    seats
        .iter()
        .filter_map(|s| SeatCode::parse(s))
        .map(|c| c.row)
        .max()
        .unwrap_or(0)
}

pub fn compute_boarding_sequence(bookings: &[Booking]) -> Vec<SequenceRow> {
    let mut rows: Vec<SequenceRow> = bookings
        .iter()
        .map(|b| {
            let max_row = farthest_row(&b.seats);
            SequenceRow {
                booking_id: b.booking_id,
                seats: b.seats.clone(),
                max_row,
                priority: Priority::from_row(max_row),
                seq: 0, // назначается после сортировки
            }
        })
        .collect();

    // Дальний ряд по убыванию, при равенстве - id по возрастанию.
    // sort_by стабильна: неразличимые строки сохраняют порядок ввода
    rows.sort_by(|a, b| {
        b.max_row
            .cmp(&a.max_row)
            .then_with(|| a.booking_id.total_cmp(&b.booking_id))
    });

    for (i, row) in rows.iter_mut().enumerate() {
        row.seq = i + 1;
    }
    rows
}

/* ---------- TIME ESTIMATE ---------- */

// 1 секунда на дальний ряд каждой брони
pub fn estimate_total_time(rows: &[SequenceRow]) -> u64 {
    rows.iter().map(|r| u64::from(r.max_row)).sum()
}
