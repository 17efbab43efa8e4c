//! Records written the first time a collection is read.

use super::destination::{Destination, PLACEHOLDER_IMAGE};
use super::program::{Price, Program};
use super::record_id::RecordId;
use super::user::{Role, User};

/// Destinations start out empty.
#[must_use]
pub fn destinations() -> Vec<Destination> {
    Vec::new()
}

struct SeedProgram {
    id: &'static str,
    name: &'static str,
    price: &'static str,
    description: &'static str,
    category: &'static str,
    rating: f64,
    destination: &'static str,
    field_of_study: &'static str,
    ielts_required: bool,
}

const SEED_PROGRAMS: [SeedProgram; 8] = [
    SeedProgram {
        id: "1",
        name: "Computer Science BSc - USA",
        price: "$25,000",
        description: "Bachelor's degree in Computer Science with focus on software engineering",
        category: "Undergraduate",
        rating: 4.8,
        destination: "USA",
        field_of_study: "Computer Science",
        ielts_required: true,
    },
    SeedProgram {
        id: "2",
        name: "MBA Program - UK",
        price: "$35,000",
        description: "Master of Business Administration at a top UK university",
        category: "Postgraduate",
        rating: 4.7,
        destination: "UK",
        field_of_study: "Business",
        ielts_required: true,
    },
    SeedProgram {
        id: "3",
        name: "Mechanical Engineering MSc - Germany",
        price: "$1,500",
        description: "Master's program in Mechanical Engineering with industry placement",
        category: "Postgraduate",
        rating: 4.6,
        destination: "Germany",
        field_of_study: "Engineering",
        ielts_required: false,
    },
    SeedProgram {
        id: "4",
        name: "Medicine MD - Australia",
        price: "$45,000",
        description: "Doctor of Medicine program with clinical rotations",
        category: "Postgraduate",
        rating: 4.9,
        destination: "Australia",
        field_of_study: "Medicine",
        ielts_required: true,
    },
    SeedProgram {
        id: "5",
        name: "Arts & Humanities BA - Canada",
        price: "$22,000",
        description: "Bachelor's degree in Arts & Humanities with various specialization options",
        category: "Undergraduate",
        rating: 4.5,
        destination: "Canada",
        field_of_study: "Arts",
        ielts_required: true,
    },
    SeedProgram {
        id: "6",
        name: "Data Science MSc - Canada",
        price: "$28,000",
        description: "Master's program in Data Science with industry projects",
        category: "Postgraduate",
        rating: 4.7,
        destination: "Canada",
        field_of_study: "Computer Science",
        ielts_required: true,
    },
    SeedProgram {
        id: "7",
        name: "Business Administration BBA - Germany",
        price: "$1,200",
        description: "Bachelor's in Business Administration with international focus",
        category: "Undergraduate",
        rating: 4.4,
        destination: "Germany",
        field_of_study: "Business",
        ielts_required: false,
    },
    SeedProgram {
        id: "8",
        name: "Environmental Science BSc - Canada",
        price: "$24,500",
        description: "Bachelor's program focusing on environmental conservation and sustainability",
        category: "Undergraduate",
        rating: 4.6,
        destination: "Canada",
        field_of_study: "Environmental Science",
        ielts_required: true,
    },
];

fn seed_id(raw: &str) -> RecordId {
    RecordId::new(raw).unwrap_or_else(|_| RecordId::random())
}

/// The eight catalogue programs shipped with a fresh install.
#[must_use]
pub fn programs() -> Vec<Program> {
    SEED_PROGRAMS
        .iter()
        .map(|seed| Program {
            id: seed_id(seed.id),
            name: seed.name.to_owned(),
            price: Price::from(seed.price),
            image: PLACEHOLDER_IMAGE.to_owned(),
            description: seed.description.to_owned(),
            category: seed.category.to_owned(),
            rating: seed.rating,
            destination: Some(seed.destination.to_owned()),
            study_level: Some(seed.category.to_owned()),
            field_of_study: Some(seed.field_of_study.to_owned()),
            ielts_required: Some(seed.ielts_required),
        })
        .collect()
}

/// One administrator and one regular account.
#[must_use]
pub fn users() -> Vec<User> {
    vec![
        User {
            id: seed_id("u1"),
            name: "Admin".to_owned(),
            email: "admin@example.com".to_owned(),
            password: "password".to_owned(),
            role: Role::Admin,
        },
        User {
            id: seed_id("u2"),
            name: "User".to_owned(),
            email: "user@example.com".to_owned(),
            password: "password".to_owned(),
            role: Role::User,
        },
    ]
}
