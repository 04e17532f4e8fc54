//! Built-in example equations.

use serde::Serialize;

use crate::conic::Kind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Example {
    pub name: &'static str,
    pub eq: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Category {
    pub kind: Kind,
    pub equations: &'static [ Example ],
}

const fn ex(name: &'static str, eq: &'static str) -> Example {
    Example { name, eq }
}

pub const LIBRARY: [ Category; 4 ] = [
    Category {
        kind: Kind::Hyperbola,
        equations: &[
            ex("Rectangular (rotated)", "xy = 8"),
            ex("General form (rotated)", "x^2 - 4xy + y^2 + 8x - 4y + 4 = 0"),
            ex("General form (shifted)", "9x^2 - 16y^2 - 18x - 64y - 199 = 0"),
            ex("General form (mixed)", "2x^2 + 7xy + 3y^2 + 8x + 14y - 6 = 0"),
        ],
    },
    Category {
        kind: Kind::Ellipse,
        equations: &[
            ex("General form (rotated)", "5x^2 - 6xy + 5y^2 - 32 = 0"),
            ex("General form (shifted)", "4x^2 + 9y^2 - 16x + 18y - 11 = 0"),
            ex("General form (rotated, other)", "13x^2 - 10xy + 13y^2 - 72 = 0"),
        ],
    },
    Category {
        kind: Kind::Parabola,
        equations: &[
            ex("General form (rotated)", "x^2 - 2xy + y^2 - 8x - 8y = 0"),
            ex("General form (shifted)", "y^2 - 8x - 6y + 17 = 0"),
            ex("General form (mixed)", "4x^2 - 4xy + y^2 - 8x - 6y + 5 = 0"),
        ],
    },
    Category {
        kind: Kind::Circle,
        equations: &[
            ex("General form (shifted)", "x^2 + y^2 - 6x + 4y - 12 = 0"),
            ex("General form (other shift)", "x^2 + y^2 + 8x - 10y - 8 = 0"),
        ],
    },
];

/// Starting contents of the UI's example list.
pub const DEFAULT_EXAMPLES: [ &str; 6 ] = [
    "x^2/9 - y^2/4 = 1",
    "y^2/16 - x^2/25 = 1",
    "5x^2 - 6xy + 5y^2 - 32 = 0",
    "x^2 + y^2 = 25",
    "x^2/16 + y^2/9 = 1",
    "y^2 = 4x",
];

pub fn examples(kind: Kind) -> &'static [ Example ] {
    LIBRARY.iter().find(|c| c.kind == kind).map(|c| c.equations).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{conic::analyze, parse::parse_general};
    use test_log::test;

    fn kind(eq: &str) -> Kind {
        analyze(parse_general(eq).unwrap()).kind()
    }

    #[test]
    fn categories_classify() {
        for category in LIBRARY.iter() {
            for example in category.equations {
                assert_eq!(kind(example.eq), category.kind, "{}: {}", example.name, example.eq);
            }
        }
        assert_eq!(examples(Kind::Circle).len(), 2);
    }

    #[test]
    fn defaults_parse() {
        let kinds: Vec<Kind> = DEFAULT_EXAMPLES.iter().map(|eq| kind(eq)).collect();
        use Kind::*;
        assert_eq!(kinds, vec![ Hyperbola, Hyperbola, Ellipse, Circle, Ellipse, Parabola ]);
    }

    #[test]
    fn json() {
        let json = serde_json::to_value(LIBRARY).unwrap();
        assert_eq!(json[0]["kind"], "hyperbola");
        assert_eq!(json[3]["equations"][1]["eq"], "x^2 + y^2 + 8x - 10y - 8 = 0");
    }
}
