//! Field metadata shared by every decoded record type
//!
//! Record structs are declared through [`stats_record!`](crate::stats_record),
//! which emits the struct together with a static field table. The table is what
//! the decoders use to map headers onto fields and what the projector walks to
//! produce display strings, so both stay in declaration order without any
//! runtime reflection.

use super::envelope::Cell;

/// Storage kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
    Text,
}

/// Static description of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Rust field name.
    pub name: &'static str,
    /// Header string in the upstream table.
    pub header: &'static str,
    /// Human label for column titles.
    pub label: &'static str,
    pub kind: FieldKind,
    /// Float in [0,1] shown as a whole percentage.
    pub percentage: bool,
    /// Whether the display layer should show the column.
    pub visible: bool,
}

impl FieldMeta {
    pub const fn new(
        name: &'static str,
        header: &'static str,
        label: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            name,
            header,
            label,
            kind,
            percentage: false,
            visible: true,
        }
    }

    pub const fn pct(mut self) -> Self {
        self.percentage = true;
        self
    }

    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Borrowed value of one field, ready for formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
}

/// Rust types a record field may have.
pub trait FieldType: Default {
    const KIND: FieldKind;

    fn from_cell(cell: &Cell) -> Self;

    fn to_value(&self) -> FieldValue<'_>;
}

impl FieldType for i64 {
    const KIND: FieldKind = FieldKind::Int;

    fn from_cell(cell: &Cell) -> Self {
        cell.as_i64()
    }

    fn to_value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self)
    }
}

impl FieldType for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn from_cell(cell: &Cell) -> Self {
        cell.as_f64()
    }

    fn to_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl FieldType for String {
    const KIND: FieldKind = FieldKind::Text;

    fn from_cell(cell: &Cell) -> Self {
        cell.as_text()
    }

    fn to_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

/// A flat record decoded from one table row.
pub trait Record: Default + Clone {
    /// Fields in declaration order.
    const FIELDS: &'static [FieldMeta];

    /// Field values in declaration order, parallel to [`Record::FIELDS`].
    fn values(&self) -> Vec<FieldValue<'_>>;

    /// Sets the field with the given Rust name. Returns `false` if there is none.
    fn set_field(&mut self, name: &str, cell: &Cell) -> bool;

    /// Field name for an upstream header, if the record has one.
    fn field_for_header(header: &str) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .find(|f| f.header == header)
            .map(|f| f.name)
    }
}

/// Declares a record struct plus its [`Record`] implementation.
///
/// ```ignore
/// stats_record! {
///     pub struct Shooting {
///         player_id: i64 = "PLAYER_ID", "ID" [hidden];
///         fg_pct: f64 = "FG_PCT", "FG%" [pct];
///     }
/// }
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! stats_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $header:literal, $label:literal $([$($flag:ident),+])?;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )+
        }

        impl $crate::data_fetcher::models::record::Record for $name {
            const FIELDS: &'static [$crate::data_fetcher::models::record::FieldMeta] = &[
                $(
                    $crate::data_fetcher::models::record::FieldMeta::new(
                        stringify!($field),
                        $header,
                        $label,
                        <$ty as $crate::data_fetcher::models::record::FieldType>::KIND,
                    )$($(.$flag())+)?,
                )+
            ];

            fn values(&self) -> Vec<$crate::data_fetcher::models::record::FieldValue<'_>> {
                vec![
                    $(
                        $crate::data_fetcher::models::record::FieldType::to_value(&self.$field),
                    )+
                ]
            }

            fn set_field(
                &mut self,
                name: &str,
                cell: &$crate::data_fetcher::models::envelope::Cell,
            ) -> bool {
                match name {
                    $(
                        stringify!($field) => {
                            self.$field = <$ty as $crate::data_fetcher::models::record::FieldType>
                                ::from_cell(cell);
                            true
                        }
                    )+
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::stats_record! {
        /// Test record covering every field kind.
        pub struct Sample {
            id: i64 = "ID", "Id" [hidden];
            name: String = "NAME", "Name";
            avg: f64 = "AVG", "Avg";
            pct: f64 = "PCT", "Pct" [pct];
            both: f64 = "BOTH", "Both" [pct, hidden];
        }
    }

    #[test]
    fn test_fields_in_declaration_order() {
        let names: Vec<_> = Sample::FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["id", "name", "avg", "pct", "both"]);
        assert_eq!(Sample::FIELDS[0].kind, FieldKind::Int);
        assert_eq!(Sample::FIELDS[1].kind, FieldKind::Text);
        assert_eq!(Sample::FIELDS[2].kind, FieldKind::Float);
    }

    #[test]
    fn test_flags() {
        assert!(!Sample::FIELDS[0].visible);
        assert!(Sample::FIELDS[1].visible);
        assert!(Sample::FIELDS[3].percentage);
        assert!(!Sample::FIELDS[2].percentage);
        assert!(Sample::FIELDS[4].percentage && !Sample::FIELDS[4].visible);
    }

    #[test]
    fn test_set_field_and_values() {
        let mut s = Sample::default();
        assert!(s.set_field("id", &Cell::Number(8.0)));
        assert!(s.set_field("name", &Cell::Text("x".to_string())));
        assert!(s.set_field("pct", &Cell::Number(0.5)));
        assert!(!s.set_field("missing", &Cell::Null));

        assert_eq!(s.id, 8);
        assert_eq!(
            s.values(),
            vec![
                FieldValue::Int(8),
                FieldValue::Text("x"),
                FieldValue::Float(0.0),
                FieldValue::Float(0.5),
                FieldValue::Float(0.0),
            ]
        );
    }

    #[test]
    fn test_field_for_header() {
        assert_eq!(Sample::field_for_header("AVG"), Some("avg"));
        assert_eq!(Sample::field_for_header("UNKNOWN"), None);
    }
}
