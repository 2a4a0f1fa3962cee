use super::INSERT_CHUNK;
use crate::errors::custom::CustomError;
use crate::models::NewProduct;
use crate::schema::products;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::instrument;

pub const MIN_PRICE: i32 = 10;
pub const MAX_PRICE: i32 = 100;

/// Product names are colour names.
pub const PRODUCT_COLOURS: &[&str] = &[
    "AliceBlue", "Aquamarine", "Azure", "Beige", "Bisque", "BlanchedAlmond", "BurlyWood",
    "CadetBlue", "Chartreuse", "Chocolate", "Coral", "CornflowerBlue", "Cornsilk", "Crimson",
    "DarkOrchid", "DarkSalmon", "DeepPink", "DodgerBlue", "FireBrick", "ForestGreen",
    "Gainsboro", "GoldenRod", "HoneyDew", "HotPink", "IndianRed", "Indigo", "Khaki", "Lavender",
    "LawnGreen", "LemonChiffon", "LightSeaGreen", "LimeGreen", "Linen", "Magenta", "Maroon",
    "MidnightBlue", "MintCream", "MistyRose", "Moccasin", "NavajoWhite", "OldLace", "Olive",
    "Orchid", "PaleGoldenRod", "PapayaWhip", "PeachPuff", "Peru", "Plum", "PowderBlue",
    "RebeccaPurple", "RosyBrown", "SaddleBrown", "SandyBrown", "SeaShell", "Sienna", "SkyBlue",
    "SlateGray", "SpringGreen", "SteelBlue", "Teal", "Thistle", "Tomato", "Turquoise", "Wheat",
];

/******************************************/
// Adding fake products
/******************************************/
/// Inserts `count` products priced uniformly in `[MIN_PRICE, MAX_PRICE]`.
///
/// Names are drawn from the colour palette without replacement; past the
/// palette size they repeat with a numeric suffix ("Teal 2"). A name already
/// stored by an earlier run fails the step with a uniqueness violation.
#[instrument(name = "Generate products", skip(conn, rng))]
pub fn generate_products<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    rng: &mut R,
    count: usize,
) -> Result<usize, CustomError> {
    let mut palette = PRODUCT_COLOURS.to_vec();
    palette.shuffle(rng);

    let batch: Vec<NewProduct> = (0..count)
        .map(|i| {
            let colour = palette[i % palette.len()];
            let round = i / palette.len();
            let name = if round == 0 {
                colour.to_string()
            } else {
                format!("{} {}", colour, round + 1)
            };
            NewProduct {
                name,
                price: rng.gen_range(MIN_PRICE..=MAX_PRICE),
            }
        })
        .collect();

    let inserted = conn.transaction::<_, CustomError, _>(|conn| {
        let mut inserted = 0;
        for chunk in batch.chunks(INSERT_CHUNK) {
            inserted += diesel::insert_into(products::table)
                .values(chunk)
                .execute(conn)?;
        }
        Ok(inserted)
    })?;

    tracing::info!(inserted, "products generated");
    Ok(inserted)
}
