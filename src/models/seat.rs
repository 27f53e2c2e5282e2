// Типизированный разбор кода места: буква колонки A-D (регистр не важен)
// + номер ряда из 1-2 цифр. Невалидный токен - это не ошибка,
// он просто не участвует в расчёте дальности.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatCode {
    pub column: char,
    pub row: u32,
}

impl SeatCode {
    pub fn parse(token: &str) -> Option<SeatCode> {
        let mut chars = token.chars();
        let column = chars.next()?.to_ascii_uppercase();
        if !('A'..='D').contains(&column) {
            return None;
        }
        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let row = digits.parse().ok()?;
        Some(SeatCode { column, row })
    }
}
