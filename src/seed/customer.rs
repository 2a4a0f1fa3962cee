use super::INSERT_CHUNK;
use crate::errors::custom::{CustomError, SeedError};
use crate::models::NewCustomer;
use crate::schema::customers;
use crate::validations::customer::{
    BoundedText, CustomerEmail, CustomerName, ADDRESS_MAX, SHORT_FIELD_MAX,
};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use fake::faker::address::en::{BuildingNumber, CityName, StreetName, ZipCode};
use fake::faker::internet::en::FreeEmailProvider;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;
use std::collections::HashSet;
use tracing::instrument;

const MAX_EMAIL_DRAWS: usize = 32;

/******************************************/
// Adding fake customers
/******************************************/
/// Inserts `count` customers in one transaction.
///
/// Emails never repeat within the batch; an email already stored by an
/// earlier run fails the whole step with a uniqueness violation.
#[instrument(name = "Generate customers", skip(conn, rng))]
pub fn generate_customers<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    rng: &mut R,
    count: usize,
) -> Result<usize, CustomError> {
    let mut seen_emails = HashSet::with_capacity(count);
    let mut batch = Vec::with_capacity(count);
    for _ in 0..count {
        batch.push(fake_customer(rng, &mut seen_emails)?);
    }

    let inserted = conn.transaction::<_, CustomError, _>(|conn| {
        let mut inserted = 0;
        for chunk in batch.chunks(INSERT_CHUNK) {
            inserted += diesel::insert_into(customers::table)
                .values(chunk)
                .execute(conn)?;
        }
        Ok(inserted)
    })?;

    tracing::info!(inserted, "customers generated");
    Ok(inserted)
}

fn fake_customer<R: Rng + ?Sized>(
    rng: &mut R,
    seen_emails: &mut HashSet<String>,
) -> Result<NewCustomer, CustomError> {
    let first: String = FirstName().fake_with_rng(rng);
    let last: String = LastName().fake_with_rng(rng);
    let building: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let postcode: String = ZipCode().fake_with_rng(rng);
    let email = draw_email(rng, &first, &last, seen_emails)?;

    let first_name = CustomerName::parse(first).map_err(CustomError::ValidationError)?;
    let last_name = CustomerName::parse(last).map_err(CustomError::ValidationError)?;
    let email = CustomerEmail::parse(email).map_err(CustomError::ValidationError)?;
    let address = BoundedText::parse("address", format!("{} {}", building, street), ADDRESS_MAX)
        .map_err(CustomError::ValidationError)?;
    let city =
        BoundedText::parse("city", city, SHORT_FIELD_MAX).map_err(CustomError::ValidationError)?;
    let postcode = BoundedText::parse("postcode", postcode, SHORT_FIELD_MAX)
        .map_err(CustomError::ValidationError)?;

    Ok(NewCustomer {
        first_name: first_name.as_ref().to_string(),
        last_name: last_name.as_ref().to_string(),
        address: address.into_inner(),
        city: city.into_inner(),
        postcode: postcode.into_inner(),
        email: email.as_ref().to_string(),
    })
}

fn draw_email<R: Rng + ?Sized>(
    rng: &mut R,
    first: &str,
    last: &str,
    seen_emails: &mut HashSet<String>,
) -> Result<String, SeedError> {
    for _ in 0..MAX_EMAIL_DRAWS {
        let provider: String = FreeEmailProvider().fake_with_rng(rng);
        let email = format!(
            "{}.{}{}@{}",
            local_part(first),
            local_part(last),
            rng.gen_range(1..1000),
            provider
        );
        if seen_emails.insert(email.clone()) {
            return Ok(email);
        }
    }
    Err(SeedError::Exhausted("email"))
}

// Names like "O'Keefe" carry characters the email rule rejects.
fn local_part(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}
