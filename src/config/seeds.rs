use crate::domain::model::InstitutionSeed;
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::{self, Validate};
use serde::Deserialize;
use std::path::Path;

/// The set of institutions to scrape. Defaults to the embedded list of six;
/// a TOML seed file can replace it wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedList {
    pub institutions: Vec<InstitutionSeed>,
}

impl SeedList {
    /// The fixed list the tool ships with.
    pub fn embedded() -> Self {
        let institutions = [
            (
                "University of Texas at Austin",
                "United States",
                "Austin",
                "https://catalog.utexas.edu/undergraduate/",
            ),
            (
                "MIT",
                "United States",
                "Cambridge",
                "http://web.mit.edu/catalog/",
            ),
            (
                "Stanford University",
                "United States",
                "Stanford",
                "https://www.stanford.edu/academics/",
            ),
            (
                "Harvard University",
                "United States",
                "Cambridge",
                "https://www.harvard.edu/academics",
            ),
            (
                "University of Oxford",
                "United Kingdom",
                "Oxford",
                "https://www.ox.ac.uk/admissions/undergraduate/courses-listing",
            ),
            (
                "University of Cambridge",
                "United Kingdom",
                "Cambridge",
                "https://www.cam.ac.uk/courses",
            ),
        ];

        Self {
            institutions: institutions
                .into_iter()
                .map(|(name, country, city, website)| InstitutionSeed {
                    name: name.to_string(),
                    country: country.to_string(),
                    city: city.to_string(),
                    website: website.to_string(),
                })
                .collect(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScrapeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScrapeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` occurrences with the environment value, leaving
    /// unknown variables untouched.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Default for SeedList {
    fn default() -> Self {
        Self::embedded()
    }
}

impl Validate for SeedList {
    fn validate(&self) -> Result<()> {
        if self.institutions.is_empty() {
            return Err(ScrapeError::MissingConfigError {
                field: "institutions".to_string(),
            });
        }

        for seed in &self.institutions {
            validation::validate_non_empty_string("institutions.name", &seed.name)?;
            validation::validate_non_empty_string("institutions.country", &seed.country)?;
            validation::validate_non_empty_string("institutions.city", &seed.city)?;
            validation::validate_url("institutions.website", &seed.website)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_list_has_six_valid_institutions() {
        let seeds = SeedList::embedded();
        assert_eq!(seeds.institutions.len(), 6);
        assert!(seeds.validate().is_ok());
        assert_eq!(seeds.institutions[0].name, "University of Texas at Austin");
        assert_eq!(seeds.institutions[5].city, "Cambridge");
    }

    #[test]
    fn test_parse_seed_toml() {
        let toml_content = r#"
[[institutions]]
name = "Test University"
country = "Testland"
city = "Testville"
website = "https://test.example.edu/catalog/"
"#;

        let seeds = SeedList::from_toml_str(toml_content).unwrap();
        assert_eq!(seeds.institutions.len(), 1);
        assert_eq!(seeds.institutions[0].name, "Test University");
        assert!(seeds.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_CATALOG_URL", "https://env.example.edu/");

        let toml_content = r#"
[[institutions]]
name = "Env University"
country = "Testland"
city = "Testville"
website = "${TEST_CATALOG_URL}"
"#;

        let seeds = SeedList::from_toml_str(toml_content).unwrap();
        assert_eq!(seeds.institutions[0].website, "https://env.example.edu/");

        std::env::remove_var("TEST_CATALOG_URL");
    }

    #[test]
    fn test_invalid_website_fails_validation() {
        let toml_content = r#"
[[institutions]]
name = "Broken University"
country = "Testland"
city = "Testville"
website = "not-a-url"
"#;

        let seeds = SeedList::from_toml_str(toml_content).unwrap();
        assert!(seeds.validate().is_err());
    }

    #[test]
    fn test_empty_list_fails_validation() {
        let seeds = SeedList::from_toml_str("institutions = []").unwrap();
        assert!(seeds.validate().is_err());
    }

    #[test]
    fn test_seed_list_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[[institutions]]
name = "File University"
country = "Testland"
city = "Testville"
website = "https://file.example.edu/"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let seeds = SeedList::from_file(temp_file.path()).unwrap();
        assert_eq!(seeds.institutions[0].name, "File University");
    }
}
