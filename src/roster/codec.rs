//! # Schema Codec
//!
//! Maps between a persisted CSV row and an [`Employee`]. The file layout is a
//! fixed nine-column schema with a literal header row:
//!
//! ```text
//! ID,FirstName,LastName,Email,Password,PhoneNo,Role,Salary,Birthdate
//! 1,Ann,Doe,ann@example.com,secret,555-0100,Engineer,50000.5,1990-01-01
//! ```
//!
//! Decoding is deliberately lenient about the id column (an unparseable id
//! becomes `0`) and strict about salary (an unparseable salary fails the whole
//! load). Rows shorter than the schema are reported as `None` so the caller
//! can skip them.

use crate::error::{Result, RosterError};
use crate::model::Employee;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::io::{Read, Write};

pub const COLUMN_COUNT: usize = 9;

pub const HEADER: [&str; COLUMN_COUNT] = [
    "ID",
    "FirstName",
    "LastName",
    "Email",
    "Password",
    "PhoneNo",
    "Role",
    "Salary",
    "Birthdate",
];

/// Reader configured for the records file. The header is treated as an
/// ordinary record so the store decides what to skip, and short rows are
/// allowed through so they can be skipped instead of failing the read.
pub fn reader<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source)
}

pub fn writer<W: Write>(sink: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink)
}

pub fn decode(record: &StringRecord) -> Result<Option<Employee>> {
    if record.len() < COLUMN_COUNT {
        return Ok(None);
    }

    let id = record[0].parse().unwrap_or(0);
    let salary = record[7]
        .parse::<f64>()
        .map_err(|source| RosterError::MalformedSalary { id, source })?;

    Ok(Some(Employee {
        id,
        first_name: record[1].to_string(),
        last_name: record[2].to_string(),
        email: record[3].to_string(),
        password: record[4].to_string(),
        phone_no: record[5].to_string(),
        role: record[6].to_string(),
        salary,
        birthdate: record[8].to_string(),
    }))
}

/// Salary uses `f64`'s `Display`, which is the shortest text that parses
/// back to the same value and never switches to exponent notation.
pub fn encode(employee: &Employee) -> [String; COLUMN_COUNT] {
    [
        employee.id.to_string(),
        employee.first_name.clone(),
        employee.last_name.clone(),
        employee.email.clone(),
        employee.password.clone(),
        employee.phone_no.clone(),
        employee.role.clone(),
        employee.salary.to_string(),
        employee.birthdate.clone(),
    ]
}
