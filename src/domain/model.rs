use serde::Deserialize;
use std::fmt;

/// Hard contract: every institution contributes exactly this many course rows,
/// whether or not any page was reachable.
pub const COURSES_PER_INSTITUTION: usize = 5;

/// Literal cell value for fields that are never (or could not be) extracted.
pub const NOT_AVAILABLE: &str = "N/A";

/// One entry of the seed list: an institution before an id is assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct InstitutionSeed {
    pub name: String,
    pub country: String,
    pub city: String,
    pub website: String,
}

/// An institution as it appears in the Universities sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Institution {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub city: String,
    pub website: String,
}

impl Institution {
    pub fn from_seed(id: u32, seed: InstitutionSeed) -> Self {
        Self {
            id,
            name: seed.name,
            country: seed.country,
            city: seed.city,
            website: seed.website,
        }
    }
}

/// Degree level inferred from the course name.
///
/// `Undergraduate` is the no-keyword default for an extracted page; placeholder
/// rows default to `Bachelors` instead. The two defaults intentionally differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Bachelors,
    Masters,
    Phd,
    Undergraduate,
}

impl Level {
    /// Substring heuristic on the course name. Case-sensitive, first match wins.
    pub fn detect(course_name: &str) -> Self {
        if course_name.contains("Bachelor") {
            Level::Bachelors
        } else if course_name.contains("Master") {
            Level::Masters
        } else if course_name.contains("Doctor") || course_name.contains("PhD") {
            Level::Phd
        } else {
            Level::Undergraduate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Bachelors => "Bachelor's",
            Level::Masters => "Master's",
            Level::Phd => "PhD",
            Level::Undergraduate => "Undergraduate",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the Courses sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub id: u32,
    pub university_id: u32,
    pub name: String,
    pub level: Level,
    pub discipline: String,
    pub duration: String,
    pub fees: String,
    pub eligibility: String,
}

impl CourseRecord {
    /// Row synthesized when no page could be fetched or no link existed.
    pub fn placeholder(id: u32, university_id: u32, name: String) -> Self {
        Self {
            id,
            university_id,
            name,
            level: Level::Bachelors,
            discipline: NOT_AVAILABLE.to_string(),
            duration: NOT_AVAILABLE.to_string(),
            fees: NOT_AVAILABLE.to_string(),
            eligibility: NOT_AVAILABLE.to_string(),
        }
    }

    /// Row built from an actually fetched program page. Duration, fees and
    /// eligibility have no extraction heuristic and stay "N/A".
    pub fn extracted(
        id: u32,
        university_id: u32,
        name: String,
        level: Level,
        discipline: String,
    ) -> Self {
        Self {
            id,
            university_id,
            name,
            level,
            discipline,
            duration: NOT_AVAILABLE.to_string(),
            fees: NOT_AVAILABLE.to_string(),
            eligibility: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Result of one program-link slot during extraction.
#[derive(Debug, Clone)]
pub enum ProgramFetch {
    /// Discovery found fewer than five links; this slot has nothing to fetch.
    NoLink,
    /// A link existed but the fetch failed (non-200, transport error).
    Failed,
    /// Raw HTML body of a successfully fetched program page.
    Page(String),
}

/// Result of the catalog-homepage stage for one institution.
#[derive(Debug, Clone)]
pub enum CatalogOutcome {
    /// Homepage fetch failed; the whole institution falls back to placeholders.
    Unreachable,
    /// Always exactly `COURSES_PER_INSTITUTION` entries.
    Pages(Vec<ProgramFetch>),
}

/// Everything extract gathered for one institution, before any parsing.
#[derive(Debug, Clone)]
pub struct InstitutionScrape {
    pub institution: Institution,
    pub outcome: CatalogOutcome,
}

/// The two relational tables accumulated over the run.
#[derive(Debug, Clone, Default)]
pub struct CatalogReport {
    pub universities: Vec<Institution>,
    pub courses: Vec<CourseRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_detection_keywords() {
        assert_eq!(Level::detect("Bachelor of Science in Physics"), Level::Bachelors);
        assert_eq!(Level::detect("Master of Engineering"), Level::Masters);
        assert_eq!(Level::detect("Doctor of Philosophy in History"), Level::Phd);
        assert_eq!(Level::detect("PhD in Chemistry"), Level::Phd);
        assert_eq!(Level::detect("Diploma in Accounting"), Level::Undergraduate);
    }

    #[test]
    fn test_level_detection_is_case_sensitive() {
        // "bachelor" lowercased does not match; falls through to the default.
        assert_eq!(Level::detect("bachelor of arts"), Level::Undergraduate);
    }

    #[test]
    fn test_level_detection_first_match_wins() {
        // A name mentioning both keeps the Bachelor branch.
        assert_eq!(
            Level::detect("Bachelor and Master combined track"),
            Level::Bachelors
        );
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Bachelors.to_string(), "Bachelor's");
        assert_eq!(Level::Masters.to_string(), "Master's");
        assert_eq!(Level::Phd.to_string(), "PhD");
        assert_eq!(Level::Undergraduate.to_string(), "Undergraduate");
    }

    #[test]
    fn test_placeholder_record_shape() {
        let record = CourseRecord::placeholder(7, 2, "Course 7".to_string());
        assert_eq!(record.id, 7);
        assert_eq!(record.university_id, 2);
        assert_eq!(record.name, "Course 7");
        assert_eq!(record.level, Level::Bachelors);
        assert_eq!(record.discipline, NOT_AVAILABLE);
        assert_eq!(record.duration, NOT_AVAILABLE);
        assert_eq!(record.fees, NOT_AVAILABLE);
        assert_eq!(record.eligibility, NOT_AVAILABLE);
    }

    #[test]
    fn test_extracted_record_pins_unmodeled_fields() {
        let record = CourseRecord::extracted(
            1,
            1,
            "Master of Engineering".to_string(),
            Level::Masters,
            "Engineering".to_string(),
        );
        assert_eq!(record.discipline, "Engineering");
        assert_eq!(record.duration, NOT_AVAILABLE);
        assert_eq!(record.fees, NOT_AVAILABLE);
        assert_eq!(record.eligibility, NOT_AVAILABLE);
    }
}
