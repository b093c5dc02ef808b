use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::num::ParseIntError;

use crate::block::{BinaryBlock, Description};
use crate::board::Board;

#[derive(Debug, PartialEq, Eq)]
pub struct ParseError(pub String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for ParseError {}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        Self(format!("{:?}", err))
    }
}

impl From<ParseIntError> for ParseError {
    fn from(err: ParseIntError) -> Self {
        Self(format!("Bad block size: {}", err))
    }
}

pub trait BoardParser {
    fn with_content(content: String) -> Result<Self, ParseError>
    where
        Self: Sized;

    /// Create an unsolved board with the parsed clues.
    fn parse(&self) -> Board;
}

pub trait LocalReader: BoardParser {
    fn read_local(file_name: &str) -> Result<Self, ParseError>
    where
        Self: Sized,
    {
        let content = Self::file_content(file_name)?;
        Self::with_content(content)
    }

    fn file_content(file_name: &str) -> io::Result<String> {
        fs::read_to_string(file_name)
    }
}

fn parse_description(line: &str) -> Result<Description, ParseIntError> {
    let blocks: Result<Vec<BinaryBlock>, _> = line.split_whitespace().map(str::parse).collect();
    blocks.map(Description::new)
}

/// Row clues, one per line, then the `#` line, then the column clues.
///
/// ```text
/// 1 1
/// 3
/// #
/// 2
/// 1
/// 2
/// ```
#[derive(Debug)]
pub struct PlainFormat {
    rows: Vec<Description>,
    columns: Vec<Description>,
}

impl PlainFormat {
    const SEPARATOR: &'static str = "#";
}

impl LocalReader for PlainFormat {}

impl BoardParser for PlainFormat {
    fn with_content(content: String) -> Result<Self, ParseError> {
        let mut rows = vec![];
        let mut columns = None;

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line == Self::SEPARATOR {
                if columns.is_some() {
                    return Err(ParseError(format!(
                        "Line {}: unexpected second separator",
                        i + 1
                    )));
                }
                columns = Some(vec![]);
                continue;
            }

            let desc = parse_description(line)
                .map_err(|err| ParseError(format!("Line {}: {}", i + 1, ParseError::from(err))))?;

            if let Some(columns) = columns.as_mut() {
                columns.push(desc);
            } else {
                rows.push(desc);
            }
        }

        let columns = columns.ok_or_else(|| {
            ParseError(format!("Separator line {:?} not found", Self::SEPARATOR))
        })?;

        Ok(Self { rows, columns })
    }

    fn parse(&self) -> Board {
        Board::with_descriptions(self.rows.clone(), self.columns.clone())
    }
}

#[cfg(feature = "ini")]
mod toml_format {
    use super::{parse_description, BoardParser, LocalReader, ParseError};
    use crate::block::Description;
    use crate::board::Board;

    use serde_derive::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Clues {
        rows: String,
        columns: String,
    }

    #[derive(Debug, Deserialize)]
    struct NonoToml {
        clues: Clues,
    }

    impl From<toml::de::Error> for ParseError {
        fn from(err: toml::de::Error) -> Self {
            Self(format!("{:?}", err))
        }
    }

    /// TOML file with the `[clues]` table:
    ///
    /// ```toml
    /// [clues]
    /// rows = """
    /// 1 1, 1 1  # two rows
    /// 3
    /// """
    /// columns = "3, 1, 3"
    /// ```
    #[derive(Debug)]
    pub struct TomlFormat {
        rows: Vec<Description>,
        columns: Vec<Description>,
    }

    impl LocalReader for TomlFormat {}

    impl BoardParser for TomlFormat {
        fn with_content(content: String) -> Result<Self, ParseError> {
            let nono: NonoToml = toml::from_str(&content)?;

            Ok(Self {
                rows: Self::parse_clues(&nono.clues.rows)?,
                columns: Self::parse_clues(&nono.clues.columns)?,
            })
        }

        fn parse(&self) -> Board {
            Board::with_descriptions(self.rows.clone(), self.columns.clone())
        }
    }

    impl TomlFormat {
        fn parse_line(descriptions: &str) -> Result<Vec<Description>, ParseError> {
            let descriptions = descriptions.trim();
            let non_comment = descriptions
                .split(|c: char| c == '#' || c == ';')
                .next()
                .unwrap_or_default();

            non_comment
                .split(',')
                .map(|row| row.trim().trim_matches(|c: char| c == '\'' || c == '"'))
                .filter(|row| !row.is_empty())
                .map(|row| parse_description(row).map_err(ParseError::from))
                .collect()
        }

        pub(super) fn parse_clues(descriptions: &str) -> Result<Vec<Description>, ParseError> {
            let mut res = vec![];
            for line in descriptions.lines() {
                res.extend(Self::parse_line(line)?);
            }
            Ok(res)
        }
    }
}

#[cfg(feature = "ini")]
pub use self::toml_format::TomlFormat;


#[cfg(all(test, feature = "ini"))]
mod toml_tests {
    use super::{BoardParser, TomlFormat};
    use crate::block::Description;

    fn clues(descriptions: &str) -> Vec<Description> {
        TomlFormat::parse_clues(descriptions).unwrap()
    }

    #[test]
    fn parse_single() {
        assert_eq!(clues("1"), vec![Description::from_sizes(&[1])])
    }

    #[test]
    fn parse_two_rows_same_line() {
        assert_eq!(
            clues("1, 2"),
            vec![Description::from_sizes(&[1]), Description::from_sizes(&[2])]
        )
    }

    #[test]
    fn parse_quotes() {
        assert_eq!(
            clues("1 2\n\"3 4\"\n'5'"),
            vec![
                Description::from_sizes(&[1, 2]),
                Description::from_sizes(&[3, 4]),
                Description::from_sizes(&[5]),
            ]
        )
    }

    #[test]
    fn parse_comments() {
        assert_eq!(
            clues("1 2 \n # the multi-line \n ; comment \n 3, 4  # trailing"),
            vec![
                Description::from_sizes(&[1, 2]),
                Description::from_sizes(&[3]),
                Description::from_sizes(&[4]),
            ]
        )
    }

    #[test]
    fn parse_bad_block() {
        assert!(TomlFormat::parse_clues("1 a").is_err());
    }

    #[test]
    fn full_document() {
        let content = "[clues]\nrows = \"\"\"\n1 1, 1 1\n3\n\"\"\"\ncolumns = \"3, 1, 3\"\n";
        let board = TomlFormat::with_content(content.to_string()).unwrap().parse();
        assert_eq!(board.height(), 3);
        assert_eq!(board.width(), 3);
    }

    #[test]
    fn missing_clues() {
        assert!(TomlFormat::with_content("[clues]\nrows = \"1\"\n".to_string()).is_err());
    }
}
