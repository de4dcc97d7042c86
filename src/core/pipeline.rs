use crate::core::html;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{
    CatalogOutcome, CatalogReport, CourseRecord, Institution, InstitutionScrape, InstitutionSeed,
    Level, ProgramFetch, COURSES_PER_INSTITUTION, NOT_AVAILABLE,
};
use crate::utils::error::{Result, ScrapeError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, StatusCode};

/// Fixed workbook filename, written under the configured output directory.
pub const OUTPUT_FILENAME: &str = "university_courses.xlsx";

const UNIVERSITY_COLUMNS: [&str; 5] =
    ["university_id", "university_name", "country", "city", "website"];

const COURSE_COLUMNS: [&str; 8] = [
    "course_id",
    "university_id",
    "course_name",
    "level",
    "discipline",
    "duration",
    "fees",
    "eligibility",
];

pub struct CatalogPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    seeds: Vec<InstitutionSeed>,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> CatalogPipeline<S, C> {
    pub fn new(storage: S, config: C, seeds: Vec<InstitutionSeed>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        // Plain browser-looking headers; enough to get past trivial bot checks.
        headers.insert(USER_AGENT, HeaderValue::from_static("Mozilla/5.0"));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9"),
        );

        let client = Client::builder()
            .timeout(config.request_timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            storage,
            config,
            seeds,
            client,
        })
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScrapeError::HttpStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Runs the two-level fetch for one institution. Every failure is absorbed
    /// into the returned outcome; this never errors.
    async fn scrape_institution(&self, institution: &Institution) -> CatalogOutcome {
        let body = match self.fetch_page(&institution.website).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(
                    "Cannot access {} catalog, using fallback courses: {}",
                    institution.name,
                    e
                );
                return CatalogOutcome::Unreachable;
            }
        };

        let links = html::discover_program_links(&body, &institution.website);
        tracing::debug!(
            "Discovered {} candidate program links for {}",
            links.len(),
            institution.name
        );

        let mut pages = Vec::with_capacity(COURSES_PER_INSTITUTION);
        for candidate in normalize_candidates(links) {
            match candidate {
                None => pages.push(ProgramFetch::NoLink),
                Some(url) => {
                    match self.fetch_page(&url).await {
                        Ok(body) => pages.push(ProgramFetch::Page(body)),
                        Err(e) => {
                            tracing::warn!(
                                "Program page {} unavailable, using fallback course: {}",
                                url,
                                e
                            );
                            pages.push(ProgramFetch::Failed);
                        }
                    }
                    // Unconditional politeness pause between page requests.
                    tokio::time::sleep(self.config.request_delay()).await;
                }
            }
        }

        CatalogOutcome::Pages(pages)
    }
}

/// Truncates or pads the discovered links to exactly one candidate per
/// course-row slot.
fn normalize_candidates(links: Vec<String>) -> Vec<Option<String>> {
    let mut candidates: Vec<Option<String>> = links
        .into_iter()
        .take(COURSES_PER_INSTITUTION)
        .map(Some)
        .collect();
    candidates.resize(COURSES_PER_INSTITUTION, None);
    candidates
}

/// Builds the course row for one program-link slot. Pure; `course_id` is the
/// already-assigned global id for this row.
fn build_course_record(course_id: u32, university_id: u32, fetch: ProgramFetch) -> CourseRecord {
    match fetch {
        ProgramFetch::NoLink | ProgramFetch::Failed => CourseRecord::placeholder(
            course_id,
            university_id,
            format!("Course {}", course_id),
        ),
        ProgramFetch::Page(body) => {
            let page = html::parse_program_page(&body);
            let name = page
                .heading
                .unwrap_or_else(|| "Course Name N/A".to_string());
            let level = Level::detect(&name);
            let discipline = page
                .breadcrumb_discipline
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            CourseRecord::extracted(course_id, university_id, name, level, discipline)
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CatalogPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<InstitutionScrape>> {
        let mut results = Vec::with_capacity(self.seeds.len());

        for (index, seed) in self.seeds.iter().enumerate() {
            let institution = Institution::from_seed(index as u32 + 1, seed.clone());
            println!("Scraping courses for {}...", institution.name);

            let outcome = self.scrape_institution(&institution).await;
            results.push(InstitutionScrape {
                institution,
                outcome,
            });
        }

        Ok(results)
    }

    async fn transform(&self, data: Vec<InstitutionScrape>) -> Result<CatalogReport> {
        let mut report = CatalogReport::default();
        let mut next_course_id: u32 = 1;

        for scrape in data {
            let university_id = scrape.institution.id;
            report.universities.push(scrape.institution);

            match scrape.outcome {
                CatalogOutcome::Unreachable => {
                    // Unreachable catalogs number their placeholders 1..=5
                    // per institution, not by global id.
                    for n in 1..=COURSES_PER_INSTITUTION {
                        report.courses.push(CourseRecord::placeholder(
                            next_course_id,
                            university_id,
                            format!("Course {}", n),
                        ));
                        next_course_id += 1;
                    }
                }
                CatalogOutcome::Pages(pages) => {
                    for fetch in pages {
                        report.courses.push(build_course_record(
                            next_course_id,
                            university_id,
                            fetch,
                        ));
                        next_course_id += 1;
                    }
                }
            }
        }

        Ok(report)
    }

    async fn load(&self, report: CatalogReport) -> Result<String> {
        let mut workbook = rust_xlsxwriter::Workbook::new();

        {
            let sheet = workbook.add_worksheet();
            sheet.set_name("Universities")?;
            for (col, header) in UNIVERSITY_COLUMNS.iter().enumerate() {
                sheet.write_string(0, col as u16, *header)?;
            }
            for (i, university) in report.universities.iter().enumerate() {
                let row = i as u32 + 1;
                sheet.write_number(row, 0, university.id)?;
                sheet.write_string(row, 1, university.name.as_str())?;
                sheet.write_string(row, 2, university.country.as_str())?;
                sheet.write_string(row, 3, university.city.as_str())?;
                sheet.write_string(row, 4, university.website.as_str())?;
            }
        }

        {
            let sheet = workbook.add_worksheet();
            sheet.set_name("Courses")?;
            for (col, header) in COURSE_COLUMNS.iter().enumerate() {
                sheet.write_string(0, col as u16, *header)?;
            }
            for (i, course) in report.courses.iter().enumerate() {
                let row = i as u32 + 1;
                sheet.write_number(row, 0, course.id)?;
                sheet.write_number(row, 1, course.university_id)?;
                sheet.write_string(row, 2, course.name.as_str())?;
                sheet.write_string(row, 3, course.level.as_str())?;
                sheet.write_string(row, 4, course.discipline.as_str())?;
                sheet.write_string(row, 5, course.duration.as_str())?;
                sheet.write_string(row, 6, course.fees.as_str())?;
                sheet.write_string(row, 7, course.eligibility.as_str())?;
            }
        }

        let data = workbook.save_to_buffer()?;

        tracing::debug!("Writing workbook ({} bytes) to storage", data.len());
        self.storage.write_file(OUTPUT_FILENAME, &data).await?;

        Ok(format!("{}/{}", self.config.output_path(), OUTPUT_FILENAME))
    }
}
