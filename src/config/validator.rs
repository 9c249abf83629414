//! Seed validation: field limits, duplicates within the file, and galaxy references.

use crate::config::SeedData;
use crate::error::ConfigError;
use crate::service::is_valid_email;
use crate::model::{EMAIL_MAX_LEN, NAME_MAX_LEN, PASSWORD_MAX_LEN, TEXT_MAX_LEN};
use std::collections::HashSet;

/// Validate seed data. `existing_galaxies` are galaxy names already stored, which planets may reference.
pub fn validate_seed(seed: &SeedData, existing_galaxies: &HashSet<String>) -> Result<(), ConfigError> {
    let mut emails = HashSet::new();
    for u in &seed.users {
        check_text("user email", &u.email, EMAIL_MAX_LEN)?;
        check_text("user password", &u.password, PASSWORD_MAX_LEN)?;
        if !is_valid_email(&u.email) {
            return Err(ConfigError::Validation(format!("user email '{}' is not an email address", u.email)));
        }
        if !emails.insert(u.email.as_str()) {
            return Err(ConfigError::Validation(format!("duplicate user email '{}'", u.email)));
        }
    }

    let mut galaxies = HashSet::new();
    for g in &seed.galaxies {
        check_text("galaxy name", &g.name, NAME_MAX_LEN)?;
        if !g.coordinate_center_x.is_finite() || !g.coordinate_center_y.is_finite() {
            return Err(ConfigError::Validation(format!("galaxy '{}' has non-finite coordinates", g.name)));
        }
        if !galaxies.insert(g.name.as_str()) {
            return Err(ConfigError::Validation(format!("duplicate galaxy '{}'", g.name)));
        }
    }

    let mut planets = HashSet::new();
    for p in &seed.planets {
        check_text("planet name", &p.name, NAME_MAX_LEN)?;
        check_optional("planet description", p.description.as_deref(), TEXT_MAX_LEN)?;
        if !galaxies.contains(p.galaxy.as_str()) && !existing_galaxies.contains(&p.galaxy) {
            return Err(ConfigError::MissingReference {
                kind: "galaxy",
                id: p.galaxy.clone(),
            });
        }
        if !planets.insert(p.name.as_str()) {
            return Err(ConfigError::Validation(format!("duplicate planet '{}'", p.name)));
        }
    }

    let mut characters = HashSet::new();
    for c in &seed.characters {
        check_text("character name", &c.name, NAME_MAX_LEN)?;
        check_optional("character gender", c.gender.as_deref(), TEXT_MAX_LEN)?;
        if !characters.insert(c.name.as_str()) {
            return Err(ConfigError::Validation(format!("duplicate character '{}'", c.name)));
        }
    }
    Ok(())
}

fn check_text(what: &str, value: &str, max: usize) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{} must not be empty", what)));
    }
    check_optional(what, Some(value), max)
}

fn check_optional(what: &str, value: Option<&str>, max: usize) -> Result<(), ConfigError> {
    match value {
        Some(v) if v.chars().count() > max => Err(ConfigError::Validation(format!(
            "{} must be at most {} characters",
            what, max
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SeedGalaxy, SeedPlanet, SeedUser};

    fn galaxy(name: &str) -> SeedGalaxy {
        SeedGalaxy {
            name: name.into(),
            coordinate_center_x: 1.0,
            coordinate_center_y: -2.0,
        }
    }

    #[test]
    fn accepts_consistent_seed() {
        let seed = SeedData {
            users: vec![SeedUser {
                email: "han@falcon.net".into(),
                password: "kessel".into(),
            }],
            galaxies: vec![galaxy("Far Far Away")],
            planets: vec![SeedPlanet {
                name: "Tatooine".into(),
                description: Some("Two suns".into()),
                galaxy: "Far Far Away".into(),
            }],
            characters: vec![],
        };
        validate_seed(&seed, &HashSet::new()).unwrap();
    }

    #[test]
    fn planet_may_reference_stored_galaxy() {
        let seed = SeedData {
            planets: vec![SeedPlanet {
                name: "Naboo".into(),
                description: None,
                galaxy: "Stored".into(),
            }],
            ..Default::default()
        };
        let existing: HashSet<String> = ["Stored".to_string()].into_iter().collect();
        validate_seed(&seed, &existing).unwrap();
    }

    #[test]
    fn rejects_unknown_galaxy() {
        let seed = SeedData {
            planets: vec![SeedPlanet {
                name: "Naboo".into(),
                description: None,
                galaxy: "Nowhere".into(),
            }],
            ..Default::default()
        };
        let err = validate_seed(&seed, &HashSet::new()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingReference { kind: "galaxy", .. }));
    }

    #[test]
    fn rejects_duplicate_emails() {
        let user = SeedUser {
            email: "dup@example.com".into(),
            password: "x".into(),
        };
        let seed = SeedData {
            users: vec![user.clone(), user],
            ..Default::default()
        };
        assert!(validate_seed(&seed, &HashSet::new()).is_err());
    }

    #[test]
    fn rejects_overlong_description() {
        let seed = SeedData {
            galaxies: vec![galaxy("G")],
            planets: vec![SeedPlanet {
                name: "Long".into(),
                description: Some("x".repeat(TEXT_MAX_LEN + 1)),
                galaxy: "G".into(),
            }],
            ..Default::default()
        };
        assert!(validate_seed(&seed, &HashSet::new()).is_err());
    }
}
