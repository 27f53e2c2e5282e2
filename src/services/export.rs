use crate::models::booking::format_booking_id;
use crate::models::SequenceRow;

// Формат экспорта зафиксирован потребителями: Seq,Booking_ID,Seats,Boarding Priority
const CSV_HEADER: [&str; 4] = ["Seq", "Booking_ID", "Seats", "Boarding Priority"];

// CSV по отсортированной последовательности, места склеиваются пробелом.
// Строки соединяются "\n" без завершающего перевода строки
pub fn sequence_to_csv(rows: &[SequenceRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(csv_line(CSV_HEADER.map(String::from)));
    for row in rows {
        lines.push(csv_line([
            row.seq.to_string(),
            format_booking_id(row.booking_id),
            row.seats.join(" "),
            row.priority.as_str().to_string(),
        ]));
    }
    lines.join("\n")
}

fn csv_line(fields: [String; 4]) -> String {
    fields
        .iter()
        .map(|f| csv_escape(f))
        .collect::<Vec<_>>()
        .join(",")
}

// Стандартное экранирование: поле с запятой/кавычкой/переводом строки
// оборачивается в кавычки, внутренние кавычки удваиваются
fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
