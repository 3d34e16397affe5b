use super::expression::{CronExpression, CronField, FieldItem, MONTH_NAMES, WEEKDAY_NAMES};
use itertools::Itertools;

/// How the values of one field are phrased.
struct Wording {
    singular: &'static str,
    plural: &'static str,
    name: fn(u32) -> String,
    single: fn(u32) -> String,
    range: fn(u32, u32) -> String,
    starting: fn(u32) -> String,
    list: fn(String) -> String,
    list_range: fn(u32, u32) -> String,
}

const HOURS: Wording = Wording {
    singular: "hour",
    plural: "hours",
    name: |h| format_time(h, 0),
    single: |h| format!("between {} and {}", format_time(h, 0), format_time(h, 59)),
    range: |a, b| format!("between {} and {}", format_time(a, 0), format_time(b, 59)),
    starting: |h| format!("starting at {}", format_time(h, 0)),
    list: |list| format!("at {}", list),
    list_range: |a, b| format!("between {} and {}", format_time(a, 0), format_time(b, 59)),
};

const MINUTES: Wording = Wording {
    singular: "minute",
    plural: "minutes",
    name: |m| m.to_string(),
    single: |m| match m {
        1 => "at 1 minute past the hour".to_string(),
        _ => format!("at {} minutes past the hour", m),
    },
    range: |a, b| format!("minutes {} through {} past the hour", a, b),
    starting: |m| format!("starting at {} minutes past the hour", m),
    list: |list| format!("at {} minutes past the hour", list),
    list_range: |a, b| format!("{} through {}", a, b),
};

const DAYS_OF_MONTH: Wording = Wording {
    singular: "day",
    plural: "days",
    name: |d| d.to_string(),
    single: |d| format!("on day {} of the month", d),
    range: |a, b| format!("between day {} and {} of the month", a, b),
    starting: |d| format!("starting on day {} of the month", d),
    list: |list| format!("on day {} of the month", list),
    list_range: |a, b| format!("{} through {}", a, b),
};

const DAYS_OF_WEEK: Wording = Wording {
    singular: "day of the week",
    plural: "days of the week",
    name: weekday_name,
    single: |d| format!("only on {}", weekday_name(d)),
    range: |a, b| format!("{} through {}", weekday_name(a), weekday_name(b)),
    starting: |d| format!("starting on {}", weekday_name(d)),
    list: |list| format!("only on {}", list),
    list_range: |a, b| format!("{} through {}", weekday_name(a), weekday_name(b)),
};

const MONTHS: Wording = Wording {
    singular: "month",
    plural: "months",
    name: month_name,
    single: |m| format!("only in {}", month_name(m)),
    range: |a, b| format!("{} through {}", month_name(a), month_name(b)),
    starting: |m| format!("starting in {}", month_name(m)),
    list: |list| format!("only in {}", list),
    list_range: |a, b| format!("{} through {}", month_name(a), month_name(b)),
};

fn format_time(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}

fn weekday_name(day: u32) -> String {
    WEEKDAY_NAMES[(day % 7) as usize].to_string()
}

fn month_name(month: u32) -> String {
    MONTH_NAMES[(month.clamp(1, 12) - 1) as usize].to_string()
}

/// Joins phrases as `a, b and c`.
fn join_list(items: Vec<String>) -> String {
    match items.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.iter().join(", "), last),
    }
}

fn every(step: u32, wording: &Wording) -> String {
    match step {
        1 => format!("every {}", wording.singular),
        _ => format!("every {} {}", step, wording.plural),
    }
}

/// Phrases a field on its own. A bare `*` yields an empty phrase.
fn describe_field(field: &CronField, wording: &Wording) -> String {
    match field.items.as_slice() {
        [FieldItem::Any] => String::new(),
        [FieldItem::Value(v)] | [FieldItem::Range(v, _)] if field.values().len() == 1 => {
            (wording.single)(*v)
        }
        [FieldItem::Range(a, b)] => (wording.range)(*a, *b),
        [FieldItem::EveryStep(step)] => every(*step, wording),
        [FieldItem::StepFrom { start, step }] => {
            format!("{}, {}", every(*step, wording), (wording.starting)(*start))
        }
        [FieldItem::RangeStep { start, end, step }] => {
            format!("{}, {}", every(*step, wording), (wording.range)(*start, *end))
        }
        items => {
            let phrases = items
                .iter()
                .flat_map(|item| match item {
                    FieldItem::Range(a, b) if a == b => vec![(wording.name)(*a)],
                    FieldItem::Range(a, b) => vec![(wording.list_range)(*a, *b)],
                    FieldItem::Value(v) => vec![(wording.name)(*v)],
                    other => CronField {
                        kind: field.kind,
                        items: vec![*other],
                    }
                    .values()
                    .into_iter()
                    .map(wording.name)
                    .collect(),
                })
                .collect();
            (wording.list)(join_list(phrases))
        }
    }
}

fn describe_time_of_day(expr: &CronExpression) -> String {
    let minute = &expr.minute;
    let hour = &expr.hour;

    if let Some(m) = minute.single_value() {
        if let Some(h) = hour.single_value() {
            return format!("at {}", format_time(h, m));
        }
        if let Some(hours) = hour.literal_values() {
            let times = hours.into_iter().map(|h| format_time(h, m)).collect();
            return format!("at {}", join_list(times));
        }
    }

    if let (Some(h), [FieldItem::Range(a, b)]) = (hour.single_value(), minute.items.as_slice()) {
        return format!(
            "every minute between {} and {}",
            format_time(h, *a),
            format_time(h, *b)
        );
    }

    let minutes = match minute.single_value() {
        Some(0) if hour.is_any() => "every hour".to_string(),
        Some(0) => String::new(),
        _ if minute.is_any() => "every minute".to_string(),
        _ => describe_field(minute, &MINUTES),
    };
    let hours = describe_field(hour, &HOURS);

    [minutes, hours]
        .into_iter()
        .filter(|phrase| !phrase.is_empty())
        .join(", ")
}

/// Upper-cases the first character.
fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl CronExpression {
    /// Describes the recurrence as an English sentence with 24-hour times.
    ///
    /// Times are those of the expression itself; no timezone is applied.
    pub fn describe(&self) -> String {
        let day_of_month = describe_field(&self.day_of_month, &DAYS_OF_MONTH);
        let mut day_of_week = describe_field(&self.day_of_week, &DAYS_OF_WEEK);
        if !day_of_month.is_empty() && !day_of_week.is_empty() {
            // both restricted: cron fires when either matches
            day_of_week = format!("or {}", day_of_week);
        }

        let sentence = [
            describe_time_of_day(self),
            day_of_month,
            day_of_week,
            describe_field(&self.month, &MONTHS),
        ]
        .into_iter()
        .filter(|phrase| !phrase.is_empty())
        .join(", ");

        sentence_case(&sentence)
    }
}
