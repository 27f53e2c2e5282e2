use serde::{Serialize, Serializer};

// Бронирование: числовой id + список мест "как есть"
// (кривые токены мест сохраняются для отображения)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    #[serde(serialize_with = "serialize_booking_id")]
    pub booking_id: f64,
    pub seats: Vec<String>,
}

// Id принимается как любое конечное число (целое или дробное),
// целые значения отдаём без ".0"
pub fn serialize_booking_id<S>(id: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if id.fract() == 0.0 && id.abs() <= i64::MAX as f64 {
        serializer.serialize_i64(*id as i64)
    } else {
        serializer.serialize_f64(*id)
    }
}

pub fn format_booking_id(id: f64) -> String {
    if id.fract() == 0.0 && id.abs() <= i64::MAX as f64 {
        format!("{}", id as i64)
    } else {
        format!("{}", id)
    }
}
