use crate::application::dto::{EnrichmentRequest, EnrichmentResponse};
use crate::application::{CancellationToken, RunState, RunStatus};
use crate::enrichment::domain::{EnrichedRecord, InputRow, InputTable};
use crate::enrichment::services::{IdentifierValidator, RecordExtractor};
use crate::ports::outbound::{
    CveRepository, InputReader, LookupProgress, ProgressReporter, ResultSink,
};
use crate::shared::Result;
use chrono::Local;

/// EnrichCvesUseCase - Pipeline orchestrator for CVE enrichment
///
/// Drives the validated CVE IDs one at a time through the lookup service
/// and the record extractor, then hands the accumulated records to the
/// result sink. Exactly one lookup is in flight at any time, and records
/// are kept in input order.
///
/// # Type Parameters
/// * `IR` - InputReader implementation
/// * `CR` - CveRepository implementation
/// * `RS` - ResultSink implementation
pub struct EnrichCvesUseCase<IR, CR, RS> {
    input_reader: IR,
    cve_repository: CR,
    result_sink: RS,
}

impl<IR, CR, RS> EnrichCvesUseCase<IR, CR, RS>
where
    IR: InputReader,
    CR: CveRepository,
    RS: ResultSink,
{
    /// Creates a new EnrichCvesUseCase with injected dependencies
    pub fn new(input_reader: IR, cve_repository: CR, result_sink: RS) -> Self {
        Self {
            input_reader,
            cve_repository,
            result_sink,
        }
    }

    /// Executes one enrichment run
    ///
    /// # Arguments
    /// * `request` - Input path and pacing
    /// * `cancellation` - Polled before every lookup
    /// * `reporter` - Receives one progress notification per processed CVE ID
    ///
    /// # Returns
    /// The written output path and the records, with status `Completed` or
    /// `Cancelled`. A cancelled run still writes what it has processed.
    ///
    /// # Errors
    /// Setup errors (unreadable input, no header, no valid CVE IDs) abort
    /// before any lookup and write nothing. Output write errors are fatal.
    /// Lookup failures never surface here.
    pub fn execute<PR>(
        &self,
        request: EnrichmentRequest,
        cancellation: CancellationToken,
        reporter: &PR,
    ) -> Result<EnrichmentResponse>
    where
        PR: ProgressReporter + ?Sized,
    {
        // Step 1: Read and validate input (setup phase)
        let table = self.load_input(&request, reporter)?;
        let total = table.len();

        // Step 2: Process CVE IDs sequentially
        let captured_at = Local::now();
        let mut state = RunState::new(cancellation);
        state.start();
        reporter.report_started(total);
        tracing::info!(total, input = %request.input_path.display(), "enrichment run started");

        let status = self.process_rows(&table, &request, &mut state, reporter);
        state.finish(status);

        // Step 3: Persist whatever was accumulated
        let output_path = self
            .result_sink
            .write(table.headers(), state.records(), captured_at)?;

        let processed = state.index();
        tracing::info!(processed, total, %status, "enrichment run finished");

        match status {
            RunStatus::Cancelled => reporter.report_completion(&format!(
                "⏹️  Processing cancelled after {}/{} CVE ID(s). Output saved to: {}",
                processed,
                total,
                output_path.display()
            )),
            _ => reporter.report_completion(&format!(
                "✅ Processing complete! Output saved to: {}",
                output_path.display()
            )),
        }

        Ok(EnrichmentResponse {
            status,
            output_path,
            records: state.into_records(),
            total,
        })
    }

    /// Reads the input file and keeps the rows with a valid CVE ID
    fn load_input<PR>(&self, request: &EnrichmentRequest, reporter: &PR) -> Result<InputTable>
    where
        PR: ProgressReporter + ?Sized,
    {
        reporter.report(&format!(
            "📖 Loading CVE list from: {}",
            request.input_path.display()
        ));

        let rows = self.input_reader.read_rows(&request.input_path)?;
        let data_rows = rows.len().saturating_sub(1);
        let table = IdentifierValidator::validate(&request.input_path, rows)?;

        let skipped = data_rows - table.len();
        if skipped > 0 {
            tracing::debug!(skipped, "rows without a valid CVE ID dropped");
            reporter.report_error(&format!(
                "⚠️  Skipped {} row(s) whose first cell is not a valid CVE ID",
                skipped
            ));
        }

        reporter.report(&format!(
            "🔍 Found {} valid CVE ID(s) to process...",
            table.len()
        ));

        Ok(table)
    }

    /// Runs the lookup loop until the rows are exhausted or cancellation is requested
    fn process_rows<PR>(
        &self,
        table: &InputTable,
        request: &EnrichmentRequest,
        state: &mut RunState,
        reporter: &PR,
    ) -> RunStatus
    where
        PR: ProgressReporter + ?Sized,
    {
        let total = table.len();

        for row in table.rows() {
            // Rate limiting: respect the lookup service between consecutive requests
            if state.index() > 0 && !request.pacing.is_zero() {
                std::thread::sleep(request.pacing);
            }

            if state.is_cancel_requested() {
                tracing::info!(processed = state.index(), total, "cancellation requested");
                return RunStatus::Cancelled;
            }

            let record = self.enrich_row(row);
            let progress = LookupProgress {
                index: state.index() + 1,
                total,
                cve_id: row.cve_id.clone(),
                outcome: record.outcome().clone(),
            };

            state.push(record);
            reporter.report_progress(&progress);
        }

        RunStatus::Completed
    }

    /// Looks up one CVE ID and maps the result onto an output record
    ///
    /// Transport failures become an Error record; the run always continues.
    fn enrich_row(&self, row: &InputRow) -> EnrichedRecord {
        let (fields, outcome) = match self.cve_repository.fetch_cve(&row.cve_id) {
            Ok(document) => RecordExtractor::extract(&document),
            Err(e) => {
                let message = format!("{:#}", e);
                tracing::warn!(cve_id = %row.cve_id, error = %message, "lookup failed");
                RecordExtractor::from_error(&message)
            }
        };

        tracing::debug!(cve_id = %row.cve_id, outcome = %outcome.label(), "record extracted");
        EnrichedRecord::new(row.cve_id.clone(), row.passthrough.clone(), fields, outcome)
    }
}
