use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract → transform → load and returns the rendered report.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting longest-pair analysis");
        self.monitor.log_stats("Start");

        tracing::info!("Extracting assignments...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} assignment records", records.len());
        self.monitor.log_stats("Extract");

        tracing::info!("Comparing adjacent assignments...");
        let report = self.pipeline.transform(records).await?;
        tracing::info!("Analysed {} projects", report.spans.len());
        self.monitor.log_stats("Transform");

        let output = self.pipeline.load(report).await?;
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(output)
    }
}
