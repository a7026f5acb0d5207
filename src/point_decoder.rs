//! Parses points written as whitespace separated numbers, one point per
//! line, e.g. `0.12 -3.4 5` for a [CartesianPoint] or `1.57 0.3` for an
//! [AngularPoint].

use crate::point::{AngularPoint, CartesianPoint};
use nom::{
    character::complete::{multispace0, space1},
    combinator::{all_consuming, map},
    error::Error,
    number::complete::double,
    sequence::{delimited, preceded, tuple},
    Finish, IResult,
};
use std::{fmt, str::FromStr};

fn parse_angular(s: &str) -> IResult<&str, AngularPoint> {
    map(
        all_consuming(delimited(
            multispace0,
            tuple((double, preceded(space1, double))),
            multispace0,
        )),
        |(u, v)| AngularPoint { u, v },
    )(s)
}

fn parse_cartesian(s: &str) -> IResult<&str, CartesianPoint> {
    map(
        all_consuming(delimited(
            multispace0,
            tuple((double, preceded(space1, double), preceded(space1, double))),
            multispace0,
        )),
        |(x, y, z)| CartesianPoint { x, y, z },
    )(s)
}

fn owned_error(error: Error<&str>) -> Error<String> {
    let Error { input, code } = error;
    Error {
        input: input.to_string(),
        code,
    }
}

impl FromStr for AngularPoint {
    type Err = Error<String>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_angular(s).finish() {
            Ok((_remaining, point)) => Ok(point),
            Err(e) => Err(owned_error(e)),
        }
    }
}

impl FromStr for CartesianPoint {
    type Err = Error<String>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_cartesian(s).finish() {
            Ok((_remaining, point)) => Ok(point),
            Err(e) => Err(owned_error(e)),
        }
    }
}

/// A line that could not be parsed as a point.
#[derive(Debug)]
pub struct PointDecodeError {
    /// 1-based line number
    pub line: usize,
    /// What nom choked on
    pub source: Error<String>,
}

impl fmt::Display for PointDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.source)
    }
}

impl std::error::Error for PointDecodeError {}

/// Parses every non-blank line of `text` as a point.
pub fn parse_lines<T>(text: &str) -> Result<Vec<T>, PointDecodeError>
where
    T: FromStr<Err = Error<String>>,
{
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.parse::<T>()
                .map_err(|source| PointDecodeError { line: i + 1, source })
        })
        .collect()
}
