use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ScrapeEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ScrapeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting catalog scrape...");
        self.monitor.log_stats("Start");

        let raw_data = self.pipeline.extract().await?;
        println!("Scraped {} institutions", raw_data.len());
        self.monitor.log_stats("Extract");

        let report = self.pipeline.transform(raw_data).await?;
        let (total_universities, total_courses) =
            (report.universities.len(), report.courses.len());
        println!(
            "Built {} university rows and {} course rows",
            total_universities, total_courses
        );
        self.monitor.log_stats("Transform");

        let output_path = self.pipeline.load(report).await?;
        println!("Output saved to: {}", output_path);
        println!(
            "Total universities: {}, Total courses: {}",
            total_universities, total_courses
        );
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
