use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
use store::schedule::WEEKDAYS;
use store::MonthGrid;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

struct DayCell {
    key: String,
    day: Option<NaiveDate>,
    class: String,
}

impl DayCell {
    fn new(
        week: usize,
        slot: usize,
        day: Option<NaiveDate>,
        selected: NaiveDate,
        today: NaiveDate,
        marked: &[NaiveDate],
    ) -> Self {
        let Some(date) = day else {
            return Self {
                key: format!("blank-{week}-{slot}"),
                day,
                class: "month-calendar-blank".to_string(),
            };
        };
        let mut class = String::from("month-calendar-day");
        if date == selected {
            class.push_str(" selected");
        }
        if date == today {
            class.push_str(" today");
        }
        if marked.contains(&date) {
            class.push_str(" has-appointments");
        }
        Self {
            key: date.to_string(),
            day,
            class,
        }
    }
}

/// Month date picker. Days in `marked` get a dot; `selected` is highlighted.
#[component]
pub fn MonthCalendar(
    selected: NaiveDate,
    today: NaiveDate,
    marked: Vec<NaiveDate>,
    on_select: EventHandler<NaiveDate>,
) -> Element {
    let mut grid = use_signal(move || MonthGrid::containing(selected));

    // Follow selections made elsewhere (e.g. jumping to today).
    use_effect(use_reactive!(|selected| {
        let shown = grid.peek().clone();
        if shown.year != selected.year() || shown.month != selected.month() {
            grid.set(MonthGrid::containing(selected));
        }
    }));

    let month = grid();
    let cells: Vec<DayCell> = month
        .weeks
        .iter()
        .enumerate()
        .flat_map(|(w, week)| {
            week.iter().enumerate().map(move |(d, cell)| (w, d, *cell))
        })
        .map(|(w, d, cell)| DayCell::new(w, d, cell, selected, today, &marked))
        .collect();

    rsx! {
        div {
            class: "month-calendar",
            div {
                class: "month-calendar-header",
                button {
                    class: "month-calendar-nav",
                    title: "Previous month",
                    onclick: move |_| {
                        let prev = grid.peek().prev();
                        grid.set(prev);
                    },
                    Icon { icon: FaChevronLeft, width: 12, height: 12 }
                }
                span { class: "month-calendar-title", "{month.title()}" }
                button {
                    class: "month-calendar-nav",
                    title: "Next month",
                    onclick: move |_| {
                        let next = grid.peek().next();
                        grid.set(next);
                    },
                    Icon { icon: FaChevronRight, width: 12, height: 12 }
                }
            }
            div {
                class: "month-calendar-grid",
                for name in WEEKDAYS {
                    span { key: "{name}", class: "month-calendar-weekday", "{name}" }
                }
                for cell in cells {
                    if let Some(day) = cell.day {
                        button {
                            title: "{cell.key}",
                            class: "{cell.class}",
                            onclick: move |_| on_select.call(day),
                            "{day.day()}"
                        }
                    } else {
                        span { class: "{cell.class}" }
                    }
                }
            }
        }
    }
}
