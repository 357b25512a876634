//! Booking form page

use askama::Template;
use axum::response::Html;

use crate::booking::RoomType;
use crate::error::Result;

/// Selector entry shown while no room is chosen.
pub const ROOM_PLACEHOLDER: &str = "-- Please Select --";

#[derive(Template)]
#[template(path = "booking_form.html")]
struct BookingFormTemplate {
    title: &'static str,
    placeholder: &'static str,
    room_options: Vec<&'static str>,
}

/// Render the empty booking form
pub async fn booking_form() -> Result<Html<String>> {
    let template = BookingFormTemplate {
        title: "Hotel Booking System",
        placeholder: ROOM_PLACEHOLDER,
        room_options: RoomType::ALL.iter().map(|room| room.label()).collect(),
    };

    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_form_lists_rooms_after_placeholder() {
        let Html(page) = booking_form().await.unwrap();

        let placeholder = page.find(ROOM_PLACEHOLDER).unwrap();
        let single = page.find(r#"value="Single""#).unwrap();
        let suite = page.find(r#"value="Suite""#).unwrap();
        assert!(placeholder < single && single < suite);
        assert!(page.contains("Hotel Booking System"));
    }

    #[test]
    fn test_placeholder_is_not_a_room() {
        assert_eq!(RoomType::from_selection(ROOM_PLACEHOLDER), None);
    }
}
