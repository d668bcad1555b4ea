use crate::domain::model::Vendor;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::validate_range;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 5] = ["name", "event_type", "city", "price", "rating"];
const OPTIONAL_CONTACT_COLUMN: &str = "contact";

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// Column positions resolved from the header row, so column order in the file does not matter.
struct ColumnIndex {
    name: usize,
    event_type: usize,
    city: usize,
    price: usize,
    rating: usize,
    contact: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord, source: &str) -> Result<Self> {
        let position = |column: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(column))
        };

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| position(*column).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(PlannerError::load(
                source,
                format!("missing required column(s): {}", missing.join(", ")),
            ));
        }

        // 上面已確認所有必要欄位都存在
        let required = |column: &str| position(column).unwrap_or_default();

        Ok(Self {
            name: required("name"),
            event_type: required("event_type"),
            city: required("city"),
            price: required("price"),
            rating: required("rating"),
            contact: position(OPTIONAL_CONTACT_COLUMN),
        })
    }
}

/// The vendor list for one session. Built once, then only read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorTable {
    vendors: Vec<Vendor>,
}

impl VendorTable {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = path.as_ref().display().to_string();
        let file = std::fs::File::open(path.as_ref())
            .map_err(|e| PlannerError::load(&source, e.to_string()))?;
        Self::from_reader(file, &source)
    }

    pub fn from_csv_bytes(data: &[u8], source: &str) -> Result<Self> {
        Self::from_reader(data, source)
    }

    pub fn from_reader<R: Read>(reader: R, source: &str) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| PlannerError::load(source, e.to_string()))?
            .clone();
        let columns = ColumnIndex::from_headers(&headers, source)?;

        let mut vendors = Vec::new();
        for record in csv_reader.records() {
            let record = record.map_err(|e| PlannerError::load(source, e.to_string()))?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            vendors.push(parse_vendor(&record, &columns, source, line)?);
        }

        tracing::debug!("Loaded {} vendors from {}", vendors.len(), source);
        Ok(Self { vendors })
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Distinct event types, compared case-insensitively; the first spelling seen wins.
    pub fn event_types(&self) -> Vec<String> {
        distinct(self.vendors.iter().map(|v| v.event_type.as_str()))
    }

    pub fn cities(&self) -> Vec<String> {
        distinct(self.vendors.iter().map(|v| v.city.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for value in values {
        seen.entry(value.to_lowercase())
            .or_insert_with(|| value.to_string());
    }
    seen.into_values().collect()
}

fn parse_vendor(
    record: &csv::StringRecord,
    columns: &ColumnIndex,
    source: &str,
    line: u64,
) -> Result<Vendor> {
    let field = |index: usize| record.get(index).unwrap_or("").trim();
    let row_error = |message: String| PlannerError::load(source, format!("line {}: {}", line, message));

    let name = field(columns.name);
    if name.is_empty() {
        return Err(row_error("vendor name is empty".to_string()));
    }

    let price_raw = field(columns.price);
    let price: f64 = price_raw
        .parse()
        .map_err(|_| row_error(format!("price '{}' is not a number", price_raw)))?;
    if !price.is_finite() || price < 0.0 {
        return Err(row_error(format!("price {} must be zero or positive", price_raw)));
    }

    let rating_raw = field(columns.rating);
    let rating: f64 = rating_raw
        .parse()
        .map_err(|_| row_error(format!("rating '{}' is not a number", rating_raw)))?;
    validate_range("rating", rating, MIN_RATING, MAX_RATING).map_err(|e| row_error(e.to_string()))?;

    let contact = columns
        .contact
        .map(field)
        .filter(|contact| !contact.is_empty())
        .map(str::to_string);

    Ok(Vendor {
        name: name.to_string(),
        event_type: field(columns.event_type).to_string(),
        city: field(columns.city).to_string(),
        price,
        rating,
        contact,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
name,event_type,city,price,rating
A,wedding,NYC,5000,4.5
B,wedding,NYC,3000,4.0
C,wedding,LA,2000,5.0
";

    #[test]
    fn test_load_valid_csv() {
        let table = VendorTable::from_csv_bytes(SAMPLE.as_bytes(), "sample").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.vendors()[0].name, "A");
        assert_eq!(table.vendors()[2].city, "LA");
        assert_eq!(table.vendors()[1].price, 3000.0);
        assert_eq!(table.vendors()[0].contact, None);
    }

    #[test]
    fn test_column_order_and_header_case_do_not_matter() {
        let csv = "Rating,Price,City,Event_Type,Name,Contact\n4.2,1500,Pune,Birthday,Balloon Co, 555-0101\n";
        let table = VendorTable::from_csv_bytes(csv.as_bytes(), "reordered").unwrap();
        let vendor = &table.vendors()[0];
        assert_eq!(vendor.name, "Balloon Co");
        assert_eq!(vendor.event_type, "Birthday");
        assert_eq!(vendor.rating, 4.2);
        assert_eq!(vendor.contact.as_deref(), Some("555-0101"));
    }

    #[test]
    fn test_missing_column_is_load_error() {
        let csv = "name,event_type,city,price\nA,wedding,NYC,5000\n";
        let err = VendorTable::from_csv_bytes(csv.as_bytes(), "broken.csv").unwrap_err();
        match err {
            PlannerError::LoadError { path, message } => {
                assert_eq!(path, "broken.csv");
                assert!(message.contains("rating"));
            }
            other => panic!("expected LoadError, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_price_reports_line() {
        let csv = "name,event_type,city,price,rating\nA,wedding,NYC,5000,4.5\nB,wedding,NYC,cheap,4.0\n";
        let err = VendorTable::from_csv_bytes(csv.as_bytes(), "bad.csv").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 3"), "{}", message);
        assert!(message.contains("cheap"), "{}", message);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let negative = "name,event_type,city,price,rating\nA,wedding,NYC,-1,4.5\n";
        assert!(VendorTable::from_csv_bytes(negative.as_bytes(), "neg").is_err());

        let rating = "name,event_type,city,price,rating\nA,wedding,NYC,100,5.5\n";
        assert!(VendorTable::from_csv_bytes(rating.as_bytes(), "rating").is_err());

        let unnamed = "name,event_type,city,price,rating\n,wedding,NYC,100,3\n";
        assert!(VendorTable::from_csv_bytes(unnamed.as_bytes(), "unnamed").is_err());
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = VendorTable::load("/definitely/not/here/vendors.csv").unwrap_err();
        assert!(matches!(err, PlannerError::LoadError { .. }));
    }

    #[test]
    fn test_distinct_event_types_and_cities() {
        let csv = "name,event_type,city,price,rating\nA,Wedding,NYC,1,1\nB,wedding,LA,1,1\nC,Birthday,nyc,1,1\n";
        let table = VendorTable::from_csv_bytes(csv.as_bytes(), "mixed").unwrap();
        assert_eq!(table.event_types(), vec!["Birthday", "Wedding"]);
        assert_eq!(table.cities(), vec!["LA", "NYC"]);
    }
}
