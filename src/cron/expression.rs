use crate::error::CronError;
use std::fmt;
use std::str::FromStr;

pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The five positions of a standard cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day-of-month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day-of-week",
        }
    }

    /// Inclusive bounds accepted when parsing. Day-of-week accepts 7 as Sunday.
    pub fn bounds(&self) -> (u32, u32) {
        match self {
            FieldKind::Minute => (0, 59),
            FieldKind::Hour => (0, 23),
            FieldKind::DayOfMonth => (1, 31),
            FieldKind::Month => (1, 12),
            FieldKind::DayOfWeek => (0, 7),
        }
    }

    fn parse_value(&self, token: &str) -> Result<u32, CronError> {
        let value = match token.parse::<u32>() {
            Ok(value) => value,
            Err(_) => self
                .value_from_name(token)
                .ok_or_else(|| self.invalid(token, "not a number or known name"))?,
        };

        let (min, max) = self.bounds();
        if value < min || value > max {
            return Err(self.invalid(token, &format!("must be between {} and {}", min, max)));
        }
        Ok(value)
    }

    fn value_from_name(&self, token: &str) -> Option<u32> {
        let names: &[&str] = match self {
            FieldKind::Month => &MONTH_NAMES,
            FieldKind::DayOfWeek => &WEEKDAY_NAMES,
            _ => return None,
        };
        let offset = if *self == FieldKind::Month { 1 } else { 0 };
        names
            .iter()
            .position(|name| token.len() == 3 && name[..3].eq_ignore_ascii_case(token))
            .map(|idx| idx as u32 + offset)
    }

    fn invalid(&self, token: &str, message: &str) -> CronError {
        CronError::InvalidField {
            field: self.name(),
            token: token.to_string(),
            message: message.to_string(),
        }
    }
}

/// A single comma-separated item of a cron field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldItem {
    /// `*`
    Any,
    /// `a`
    Value(u32),
    /// `a-b`
    Range(u32, u32),
    /// `*/n`
    EveryStep(u32),
    /// `a/n`
    StepFrom { start: u32, step: u32 },
    /// `a-b/n`
    RangeStep { start: u32, end: u32, step: u32 },
}

impl FieldItem {
    /// Expands the item to the concrete values it matches.
    fn values(&self, kind: FieldKind) -> Vec<u32> {
        let (min, max) = kind.bounds();
        match *self {
            FieldItem::Any => (min..=max).collect(),
            FieldItem::Value(v) => vec![v],
            FieldItem::Range(a, b) => (a..=b).collect(),
            FieldItem::EveryStep(step) => (min..=max).step_by(step as usize).collect(),
            FieldItem::StepFrom { start, step } => (start..=max).step_by(step as usize).collect(),
            FieldItem::RangeStep { start, end, step } => {
                (start..=end).step_by(step as usize).collect()
            }
        }
    }
}

/// One parsed field of a cron expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CronField {
    pub kind: FieldKind,
    pub items: Vec<FieldItem>,
}

impl CronField {
    pub fn parse(kind: FieldKind, token: &str) -> Result<Self, CronError> {
        let items = token
            .split(',')
            .map(|part| Self::parse_item(kind, part))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { kind, items })
    }

    fn parse_item(kind: FieldKind, part: &str) -> Result<FieldItem, CronError> {
        if part.is_empty() {
            return Err(kind.invalid(part, "empty list item"));
        }

        if let Some((base, step)) = part.split_once('/') {
            let step = step
                .parse::<u32>()
                .map_err(|_| kind.invalid(part, "step is not a number"))?;
            if step == 0 {
                return Err(kind.invalid(part, "step must be greater than zero"));
            }
            return match Self::parse_base(kind, base, part)? {
                FieldItem::Any => Ok(FieldItem::EveryStep(step)),
                FieldItem::Value(start) => Ok(FieldItem::StepFrom { start, step }),
                FieldItem::Range(start, end) => Ok(FieldItem::RangeStep { start, end, step }),
                _ => Err(kind.invalid(part, "nested step")),
            };
        }

        Self::parse_base(kind, part, part)
    }

    fn parse_base(kind: FieldKind, base: &str, part: &str) -> Result<FieldItem, CronError> {
        if base == "*" {
            return Ok(FieldItem::Any);
        }
        if let Some((start, end)) = base.split_once('-') {
            let start = kind.parse_value(start)?;
            let end = kind.parse_value(end)?;
            if start > end {
                return Err(kind.invalid(part, "range start is after range end"));
            }
            return Ok(FieldItem::Range(start, end));
        }
        kind.parse_value(base).map(FieldItem::Value)
    }

    /// True when the field is a bare `*`.
    pub fn is_any(&self) -> bool {
        matches!(self.items.as_slice(), [FieldItem::Any])
    }

    /// The value when the field is exactly one literal.
    pub fn single_value(&self) -> Option<u32> {
        match self.items.as_slice() {
            [FieldItem::Value(v)] => Some(*v),
            _ => None,
        }
    }

    /// The values when the field is a list of plain literals.
    pub fn literal_values(&self) -> Option<Vec<u32>> {
        self.items
            .iter()
            .map(|item| match item {
                FieldItem::Value(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    /// All matched values, sorted and deduplicated. Day-of-week 7 folds into 0.
    pub fn values(&self) -> Vec<u32> {
        let mut values: Vec<u32> = self
            .items
            .iter()
            .flat_map(|item| item.values(self.kind))
            .map(|v| if self.kind == FieldKind::DayOfWeek && v == 7 { 0 } else { v })
            .collect();
        values.sort_unstable();
        values.dedup();
        values
    }
}

/// A validated five-field cron expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CronExpression {
    source: String,
    pub minute: CronField,
    pub hour: CronField,
    pub day_of_month: CronField,
    pub month: CronField,
    pub day_of_week: CronField,
}

impl CronExpression {
    pub fn parse(expression: &str) -> Result<Self, CronError> {
        let trimmed = expression.trim();
        let expanded = if trimmed.starts_with('@') {
            Self::expand_macro(trimmed)?
        } else {
            trimmed
        };

        let fields: Vec<&str> = expanded.split_whitespace().collect();
        let [minute, hour, day_of_month, month, day_of_week] = fields.as_slice() else {
            return Err(CronError::FieldCount {
                expression: expression.to_string(),
                found: fields.len(),
            });
        };

        Ok(Self {
            source: trimmed.to_string(),
            minute: CronField::parse(FieldKind::Minute, minute)?,
            hour: CronField::parse(FieldKind::Hour, hour)?,
            day_of_month: CronField::parse(FieldKind::DayOfMonth, day_of_month)?,
            month: CronField::parse(FieldKind::Month, month)?,
            day_of_week: CronField::parse(FieldKind::DayOfWeek, day_of_week)?,
        })
    }

    fn expand_macro(name: &str) -> Result<&'static str, CronError> {
        match name.to_ascii_lowercase().as_str() {
            "@yearly" | "@annually" => Ok("0 0 1 1 *"),
            "@monthly" => Ok("0 0 1 * *"),
            "@weekly" => Ok("0 0 * * 0"),
            "@daily" | "@midnight" => Ok("0 0 * * *"),
            "@hourly" => Ok("0 * * * *"),
            _ => Err(CronError::UnsupportedMacro(name.to_string())),
        }
    }

    /// The expression as it was given, trimmed.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl FromStr for CronExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
