//! Shared traits, the weekday enumeration, and fixed seven-slot containers.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::DomainError;

/// Exposes a stable identifier for catalog entities.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
/// Day of the repeating weekly template, indexed Sunday=0 through Saturday=6.
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All seven weekdays in index order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The following weekday, wrapping Saturday back to Sunday.
    pub fn succ(self) -> Self {
        Self::ALL[(self.index() + 1) % 7]
    }

    /// Lowercase key used in serialized weekly structures.
    pub fn key(self) -> &'static str {
        match self {
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl TryFrom<usize> for Weekday {
    type Error = DomainError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(DomainError::InvalidWeekdayIndex(index))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_sunday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Exactly seven values, one per [`Weekday`].
///
/// Serializes as an object keyed by lowercase weekday name; absent keys
/// deserialize to `T::default()`.
pub struct WeekdayMap<T>([T; 7]);

/// Per-weekday integer counts (e.g. occurrences within a date range).
pub type WeekdayCounts = WeekdayMap<u32>;

/// Per-weekday monetary amounts.
pub type WeekdayAmounts = WeekdayMap<f64>;

impl<T> WeekdayMap<T> {
    pub fn from_fn(mut f: impl FnMut(Weekday) -> T) -> Self {
        Self(std::array::from_fn(|idx| f(Weekday::ALL[idx])))
    }

    pub fn as_array(&self) -> &[T; 7] {
        &self.0
    }

    pub fn into_array(self) -> [T; 7] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &T)> {
        Weekday::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(Weekday, &T) -> U) -> WeekdayMap<U> {
        WeekdayMap::from_fn(|day| f(day, &self[day]))
    }
}

impl<T: Clone> WeekdayMap<T> {
    pub fn filled(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl WeekdayCounts {
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl WeekdayAmounts {
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl<T: Default> Default for WeekdayMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> From<[T; 7]> for WeekdayMap<T> {
    fn from(values: [T; 7]) -> Self {
        Self(values)
    }
}

impl<T> Index<Weekday> for WeekdayMap<T> {
    type Output = T;

    fn index(&self, day: Weekday) -> &T {
        &self.0[day.index()]
    }
}

impl<T> IndexMut<Weekday> for WeekdayMap<T> {
    fn index_mut(&mut self, day: Weekday) -> &mut T {
        &mut self.0[day.index()]
    }
}

impl<T: Serialize> Serialize for WeekdayMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("WeekdayMap", 7)?;
        for (day, value) in self.iter() {
            state.serialize_field(day.key(), value)?;
        }
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
struct NamedWeek<T> {
    #[serde(default)]
    sunday: T,
    #[serde(default)]
    monday: T,
    #[serde(default)]
    tuesday: T,
    #[serde(default)]
    wednesday: T,
    #[serde(default)]
    thursday: T,
    #[serde(default)]
    friday: T,
    #[serde(default)]
    saturday: T,
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for WeekdayMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let week = NamedWeek::<T>::deserialize(deserializer)?;
        Ok(Self([
            week.sunday,
            week.monday,
            week.tuesday,
            week.wednesday,
            week.thursday,
            week.friday,
            week.saturday,
        ]))
    }
}
