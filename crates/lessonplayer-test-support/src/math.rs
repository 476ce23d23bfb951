//! Fake math parser — a `MathExpressionParser` with a scripted outcome.

use std::sync::Mutex;

use lessonplayer_core::math::{
    MathExpressionMode, MathExpressionParser, MathParsingError, ParsedMath,
};

/// Parsed result returned by `FakeMathParser`, with fixed renderings.
#[derive(Debug, Clone)]
pub struct FakeParsedMath {
    /// Returned from `to_latex` regardless of the division flag.
    pub latex: String,
    /// Returned from `to_human_readable`.
    pub human_readable: Option<String>,
    /// Returned from `to_plain_text`.
    pub plain_text: String,
}

impl ParsedMath for FakeParsedMath {
    fn to_latex(&self, _divide_as_fraction: bool) -> String {
        self.latex.clone()
    }

    fn to_human_readable(&self) -> Option<String> {
        self.human_readable.clone()
    }

    fn to_plain_text(&self) -> String {
        self.plain_text.clone()
    }
}

/// A math parser that returns the configured result on every call and
/// records the arguments it was called with.
#[derive(Debug)]
pub struct FakeMathParser {
    result: Result<FakeParsedMath, MathParsingError>,
    calls: Mutex<Vec<(String, MathExpressionMode, Vec<String>)>>,
}

impl FakeMathParser {
    /// A parser that succeeds with the given renderings.
    #[must_use]
    pub fn succeeding(latex: &str, human_readable: Option<&str>) -> Self {
        Self {
            result: Ok(FakeParsedMath {
                latex: latex.to_owned(),
                human_readable: human_readable.map(str::to_owned),
                plain_text: latex.to_owned(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A parser that fails with `error`.
    #[must_use]
    pub fn failing(error: MathParsingError) -> Self {
        Self {
            result: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns every `(raw, mode, allowed_variables)` the parser was called with.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<(String, MathExpressionMode, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl MathExpressionParser for FakeMathParser {
    fn parse(
        &self,
        raw: &str,
        mode: MathExpressionMode,
        allowed_variables: &[String],
    ) -> Result<Box<dyn ParsedMath>, MathParsingError> {
        self.calls
            .lock()
            .unwrap()
            .push((raw.to_owned(), mode, allowed_variables.to_vec()));
        match &self.result {
            Ok(parsed) => Ok(Box::new(parsed.clone())),
            Err(error) => Err(error.clone()),
        }
    }
}
