//! Camp domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::camp::{CampDto, CreateCampDto, UpdateCampDto};

/// A medical camp open for participant registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Camp {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub professional: String,
    /// Current participant count, adjusted atomically at the store level.
    pub participants: i32,
    pub fees: f64,
    pub description: String,
}

impl Camp {
    /// Converts the camp domain model to a DTO for API responses.
    pub fn into_dto(self) -> CampDto {
        CampDto {
            id: self.id,
            name: self.name,
            image: self.image,
            date_time: self.date_time,
            location: self.location,
            professional: self.professional,
            participants: self.participants,
            fees: self.fees,
            description: self.description,
        }
    }

    /// Converts an entity model to a camp domain model at the repository boundary.
    pub fn from_entity(entity: entity::camp::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image: entity.image,
            date_time: entity.date_time,
            location: entity.location,
            professional: entity.professional,
            participants: entity.participants,
            fees: entity.fees,
            description: entity.description,
        }
    }
}

/// Parameters for creating a camp. New camps start with zero participants.
#[derive(Debug, Clone)]
pub struct CreateCampParam {
    pub name: String,
    pub image: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub professional: String,
    pub fees: f64,
    pub description: String,
}

impl CreateCampParam {
    pub fn from_dto(dto: CreateCampDto) -> Self {
        Self {
            name: dto.name,
            image: dto.image,
            date_time: dto.date_time,
            location: dto.location,
            professional: dto.professional,
            fees: dto.fees,
            description: dto.description,
        }
    }
}

/// Parameters for replacing a camp's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateCampParam {
    pub name: String,
    pub image: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub professional: String,
    pub participants: i32,
    pub fees: f64,
    pub description: String,
}

impl UpdateCampParam {
    pub fn from_dto(dto: UpdateCampDto) -> Self {
        Self {
            name: dto.name,
            image: dto.image,
            date_time: dto.date_time,
            location: dto.location,
            professional: dto.professional,
            participants: dto.participants,
            fees: dto.fees,
            description: dto.description,
        }
    }
}

/// Direction of a participant-counter adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountAction {
    Increment,
    Decrement,
}

impl CountAction {
    /// Parses the wire action; anything other than the two known verbs is invalid.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "increment" => Some(Self::Increment),
            "decrement" => Some(Self::Decrement),
            _ => None,
        }
    }

    pub fn delta(&self) -> i32 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_actions() {
        assert_eq!(CountAction::parse("increment"), Some(CountAction::Increment));
        assert_eq!(CountAction::parse("decrement"), Some(CountAction::Decrement));
    }

    #[test]
    fn rejects_unknown_actions() {
        assert_eq!(CountAction::parse("sideways"), None);
        assert_eq!(CountAction::parse("Increment"), None);
        assert_eq!(CountAction::parse(""), None);
    }

    #[test]
    fn deltas_are_signed_units() {
        assert_eq!(CountAction::Increment.delta(), 1);
        assert_eq!(CountAction::Decrement.delta(), -1);
    }
}
