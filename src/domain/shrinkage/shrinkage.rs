use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Data required to register a new shrinkage event (header row)
///
/// The identifier is not part of this type: storage assigns it on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShrinkageHeader {
    date: NaiveDate,
    host_name: String,
    branch_id: String,
    total_evaluated: Decimal,
}

impl NewShrinkageHeader {
    /// Creates a validated header
    ///
    /// # Validation Rules
    /// - Host name and branch id must not be blank
    /// - Declared total evaluated amount must not be negative
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use merma_api::domain::shrinkage::NewShrinkageHeader;
    /// use rust_decimal::Decimal;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    /// let header = NewShrinkageHeader::new(date, "10234", "S01", Decimal::ZERO).unwrap();
    /// assert_eq!(header.branch_id(), "S01");
    /// ```
    pub fn new(
        date: NaiveDate,
        host_name: impl Into<String>,
        branch_id: impl Into<String>,
        total_evaluated: Decimal,
    ) -> Result<Self, String> {
        let host_name = host_name.into().trim().to_string();
        let branch_id = branch_id.into().trim().to_string();

        if host_name.is_empty() {
            return Err("Host name (Anfitrion) cannot be empty".to_string());
        }
        if branch_id.is_empty() {
            return Err("Branch id (Sucursal) cannot be empty".to_string());
        }
        if total_evaluated < Decimal::ZERO {
            return Err("Total evaluated cannot be negative".to_string());
        }

        Ok(Self {
            date,
            host_name,
            branch_id,
            total_evaluated,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn branch_id(&self) -> &str {
        &self.branch_id
    }

    pub fn total_evaluated(&self) -> Decimal {
        self.total_evaluated
    }
}

/// A shrinkage header together with the aggregate of its detail lines
#[derive(Debug, Clone, PartialEq)]
pub struct ShrinkageSummary {
    pub id: i64,
    pub date: NaiveDate,
    pub host_name: String,
    pub branch_id: String,
    pub total_evaluated: Decimal,
    /// Σ(quantity × unit price) over the header's detail lines, zero when none
    pub total_shrinkage: Decimal,
}

/// One line item to attach to an existing header
///
/// Without an explicit unit price the product's catalog sale price is
/// stored, so the product must exist in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShrinkageDetailLine {
    header_id: i64,
    product_id: String,
    quantity: Decimal,
    unit_price: Option<Decimal>,
    reason_id: i32,
}

impl NewShrinkageDetailLine {
    /// Creates a validated detail line
    ///
    /// # Validation Rules
    /// - Product id must not be blank
    /// - Quantity must be greater than zero
    /// - Unit price, when given, must not be negative
    pub fn new(
        header_id: i64,
        product_id: impl Into<String>,
        quantity: Decimal,
        unit_price: Option<Decimal>,
        reason_id: i32,
    ) -> Result<Self, String> {
        let product_id = product_id.into().trim().to_string();

        if product_id.is_empty() {
            return Err("Product id cannot be empty".to_string());
        }
        if quantity <= Decimal::ZERO {
            return Err("Quantity must be greater than zero".to_string());
        }
        if unit_price.is_some_and(|price| price < Decimal::ZERO) {
            return Err("Unit price cannot be negative".to_string());
        }

        Ok(Self {
            header_id,
            product_id,
            quantity,
            unit_price,
            reason_id,
        })
    }

    pub fn header_id(&self) -> i64 {
        self.header_id
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Option<Decimal> {
        self.unit_price
    }

    pub fn reason_id(&self) -> i32 {
        self.reason_id
    }
}

/// A stored line item, joined with product and reason descriptions
#[derive(Debug, Clone, PartialEq)]
pub struct ShrinkageDetailLine {
    pub header_id: i64,
    pub product_id: String,
    pub product_description: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub reason_id: i32,
    pub reason_description: Option<String>,
}

impl ShrinkageDetailLine {
    pub fn line_total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// Reference data: why stock was written off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShrinkageReason {
    pub id: i32,
    pub description: String,
}

/// Reference data: a catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub description: String,
    pub sale_price: Decimal,
}
