//! Table shape configuration and its validating builder.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::fill::FillOrder;

/// Unvalidated table configuration.
///
/// Setters never fail; everything is checked once by [`build`](Self::build).
/// Values are kept signed so that bad input (from code or from a config file)
/// is reported instead of silently wrapping.
///
/// ```
/// use extrautils_table::{FillOrder, TableSpec};
///
/// let spec = TableSpec::builder()
///     .width(3)
///     .height(2)
///     .list_size(5)
///     .fill_order(FillOrder::TopLeftRight)
///     .build()
///     .unwrap();
///
/// assert_eq!(spec.width(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSpecBuilder {
    width: i64,
    height: i64,
    list_size: i64,
    fill_order: Option<FillOrder>,
    start_padding: i64,
}

impl TableSpecBuilder {
    /// Creates an empty builder. At least a dimension, a list size and a fill
    /// order must be set before it will build.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of columns; `0` means "infer from height and list size".
    pub fn width(mut self, width: i64) -> Self {
        self.width = width;
        self
    }

    /// Number of rows; `0` means "infer from width and list size".
    pub fn height(mut self, height: i64) -> Self {
        self.height = height;
        self
    }

    /// Number of source items to place.
    pub fn list_size(mut self, list_size: i64) -> Self {
        self.list_size = list_size;
        self
    }

    pub fn fill_order(mut self, fill_order: FillOrder) -> Self {
        self.fill_order = Some(fill_order);
        self
    }

    /// Number of empty slots placed before the first item.
    pub fn start_padding(mut self, start_padding: i64) -> Self {
        self.start_padding = start_padding;
        self
    }

    /// Validates the configuration and resolves any missing dimension.
    pub fn build(self) -> Result<TableSpec, ValidationError> {
        let fill_order = self.validate()?;

        let mut width = self.width as usize;
        let mut height = self.height as usize;
        let list_size = self.list_size as usize;

        let mut inferred = Inferred::Neither;

        if width == 0 {
            width = list_size.div_ceil(height);
            inferred = Inferred::Width;
            debug!(width, height, list_size, "inferred table width");
        } else if height == 0 {
            height = list_size.div_ceil(width);
            inferred = Inferred::Height;
            debug!(width, height, list_size, "inferred table height");
        }

        Ok(TableSpec {
            width,
            height,
            list_size,
            fill_order,
            start_padding: self.start_padding as usize,
            inferred,
        })
    }

    fn validate(&self) -> Result<FillOrder, ValidationError> {
        if self.width == 0 && self.height == 0 {
            return Err(ValidationError::MissingDimensions);
        }
        if self.width < 0 {
            return Err(ValidationError::NegativeWidth);
        }
        if self.height < 0 {
            return Err(ValidationError::NegativeHeight);
        }
        if self.list_size <= 0 {
            return Err(ValidationError::NonPositiveListSize);
        }
        let fill_order = self.fill_order.ok_or(ValidationError::MissingFillOrder)?;
        if self.start_padding < 0 {
            return Err(ValidationError::NegativeStartPadding);
        }
        if self.width > 0
            && self.height > 0
            && self.list_size.saturating_add(self.start_padding)
                > self.width.saturating_mul(self.height)
        {
            return Err(ValidationError::DimensionsTooSmall);
        }
        Ok(fill_order)
    }
}

/// Which dimension, if any, [`TableSpecBuilder::build`] computed itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Inferred {
    Neither,
    Width,
    Height,
}

/// A validated table configuration.
///
/// Both dimensions are resolved and nonzero. Converting back into a
/// [`TableSpecBuilder`] (which is also what serialization writes) leaves an
/// inferred dimension at `0`, so the result always builds the same spec.
/// Instances are immutable and can be shared freely between threads; every
/// query on them is a pure function of the fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableSpecBuilder", into = "TableSpecBuilder")]
pub struct TableSpec {
    width: usize,
    height: usize,
    list_size: usize,
    fill_order: FillOrder,
    start_padding: usize,
    inferred: Inferred,
}

impl TableSpec {
    /// Create a spec builder.
    pub fn builder() -> TableSpecBuilder {
        TableSpecBuilder::default()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of source items the table is laid out for.
    pub fn list_size(&self) -> usize {
        self.list_size
    }

    pub fn fill_order(&self) -> FillOrder {
        self.fill_order
    }

    pub fn start_padding(&self) -> usize {
        self.start_padding
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Maps a linear position to the source index it holds, if any.
    pub(crate) fn slot(&self, position: usize) -> Option<usize> {
        if position < self.start_padding {
            None
        } else if position < self.list_size + self.start_padding {
            Some(position - self.start_padding)
        } else {
            None
        }
    }
}

impl TryFrom<TableSpecBuilder> for TableSpec {
    type Error = ValidationError;

    fn try_from(builder: TableSpecBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

impl From<TableSpec> for TableSpecBuilder {
    fn from(spec: TableSpec) -> Self {
        let (width, height) = match spec.inferred {
            Inferred::Neither => (spec.width, spec.height),
            Inferred::Width => (0, spec.height),
            Inferred::Height => (spec.width, 0),
        };
        TableSpecBuilder {
            width: width as i64,
            height: height as i64,
            list_size: spec.list_size as i64,
            fill_order: Some(spec.fill_order),
            start_padding: spec.start_padding as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> TableSpecBuilder {
        TableSpec::builder()
            .width(3)
            .height(2)
            .list_size(5)
            .fill_order(FillOrder::TopLeftRight)
    }

    #[test]
    fn builds_with_both_dimensions() {
        let spec = base().build().unwrap();
        assert_eq!(spec.width(), 3);
        assert_eq!(spec.height(), 2);
        assert_eq!(spec.list_size(), 5);
        assert_eq!(spec.start_padding(), 0);
        assert_eq!(spec.cell_count(), 6);
    }

    #[test]
    fn missing_dimensions() {
        let err = base().width(0).height(0).build().unwrap_err();
        assert_eq!(err, ValidationError::MissingDimensions);
        assert_eq!(err.to_string(), "either width or height must be given");
    }

    #[test]
    fn negative_width() {
        let err = base().width(-1).build().unwrap_err();
        assert_eq!(err, ValidationError::NegativeWidth);
        assert_eq!(err.to_string(), "table width must be non-negative");
    }

    #[test]
    fn negative_height() {
        let err = base().height(-4).build().unwrap_err();
        assert_eq!(err, ValidationError::NegativeHeight);
        assert_eq!(err.to_string(), "table height must be non-negative");
    }

    #[test]
    fn list_size_must_be_positive() {
        for size in [0, -3] {
            let err = base().list_size(size).build().unwrap_err();
            assert_eq!(err, ValidationError::NonPositiveListSize);
            assert_eq!(err.to_string(), "list size must be given and positive");
        }
    }

    #[test]
    fn fill_order_is_required() {
        let err = TableSpec::builder()
            .width(3)
            .list_size(5)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingFillOrder);
        assert_eq!(err.to_string(), "filling type must be given");
    }

    #[test]
    fn negative_start_padding() {
        let err = base().start_padding(-1).build().unwrap_err();
        assert_eq!(err, ValidationError::NegativeStartPadding);
        assert_eq!(err.to_string(), "start padding must be non-negative");
    }

    #[test]
    fn dimensions_too_small() {
        let err = base().width(2).height(2).build().unwrap_err();
        assert_eq!(err, ValidationError::DimensionsTooSmall);
        assert_eq!(err.to_string(), "given dimensions too small for list size");
    }

    #[test]
    fn padding_counts_against_capacity() {
        let err = base().list_size(5).start_padding(2).build().unwrap_err();
        assert_eq!(err, ValidationError::DimensionsTooSmall);
        assert!(base().list_size(4).start_padding(2).build().is_ok());
    }

    #[test]
    fn first_failing_rule_wins() {
        let err = TableSpec::builder()
            .width(-1)
            .list_size(0)
            .start_padding(-1)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::NegativeWidth);
    }

    #[test]
    fn infers_height() {
        let spec = base().height(0).width(2).build().unwrap();
        assert_eq!(spec.height(), 3);
        assert_eq!(spec.width(), 2);
    }

    #[test]
    fn infers_width() {
        let spec = base().width(0).height(2).list_size(6).build().unwrap();
        assert_eq!(spec.width(), 3);
    }

    #[test]
    fn inference_ignores_padding() {
        let spec = TableSpec::builder()
            .height(5)
            .list_size(5)
            .start_padding(1)
            .fill_order(FillOrder::TopLeftBottom)
            .build()
            .unwrap();
        assert_eq!(spec.width(), 1);
    }

    #[test]
    fn slot_mapping() {
        let spec = base().list_size(3).start_padding(2).build().unwrap();
        assert_eq!(spec.slot(0), None);
        assert_eq!(spec.slot(1), None);
        assert_eq!(spec.slot(2), Some(0));
        assert_eq!(spec.slot(4), Some(2));
        assert_eq!(spec.slot(5), None);
    }

    #[test]
    fn inferred_padded_spec_converts_back_to_its_inputs() {
        let spec = TableSpec::builder()
            .height(5)
            .list_size(5)
            .start_padding(1)
            .fill_order(FillOrder::TopLeftBottom)
            .build()
            .unwrap();
        assert_eq!(spec.width(), 1);

        let builder = TableSpecBuilder::from(spec.clone());
        let inputs = TableSpec::builder()
            .height(5)
            .list_size(5)
            .start_padding(1)
            .fill_order(FillOrder::TopLeftBottom);
        assert_eq!(builder, inputs);
        assert_eq!(builder.build(), Ok(spec));
    }

    #[test]
    fn inferred_padded_spec_survives_json() {
        for builder in [
            TableSpec::builder().height(5).list_size(5).start_padding(1),
            TableSpec::builder().width(1).list_size(1).start_padding(1),
        ] {
            let spec = builder.fill_order(FillOrder::TopLeftBottom).build().unwrap();
            let json = serde_json::to_string(&spec).unwrap();
            let back: TableSpec = serde_json::from_str(&json).unwrap();
            assert_eq!(back, spec, "{json}");
            assert_eq!(back.index_pattern(), spec.index_pattern());
        }
    }

    #[test]
    fn given_dimensions_are_written_as_given() {
        let spec = base().build().unwrap();
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["width"], 3);
        assert_eq!(json["height"], 2);
    }

    #[test]
    fn builder_round_trip_keeps_resolved_dimensions() {
        let spec = base().height(0).build().unwrap();
        let rebuilt = TableSpecBuilder::from(spec.clone()).build().unwrap();
        assert_eq!(rebuilt, spec);
    }
}
