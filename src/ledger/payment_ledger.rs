use std::collections::HashMap;
use std::io::{Read, Write};

use super::error::{Error, ProcessingError};
use super::event::{Charge, Event, EventRecord, StatusUpdate};
use super::record::{PaymentRecord, RecordId};

/// The core payment ledger.
///
/// Applies events (charges and gateway status updates) to payment records
/// and maintains the resulting record set. Charges create records at their
/// fixed tariff; status updates walk records through the payment lifecycle.
#[derive(Debug, Default)]
pub struct PaymentLedger {
    /// Maps record ID to payment record state
    records: HashMap<RecordId, PaymentRecord>,
}

impl PaymentLedger {
    /// Create a new `PaymentLedger` with no records
    pub fn new() -> Self {
        log::trace!("PaymentLedger initialized");
        Self {
            records: HashMap::new(),
        }
    }

    /// Primary API: Process events from any source (File, `TcpStream`, etc.)
    /// Note that the CSV reader is buffered automatically, so you should not wrap rdr in a buffered reader like `io::BufReader`.
    pub fn process_events<R: Read>(&mut self, reader: R) -> Result<(), Error> {
        log::info!("Starting event processing");

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All) // trim whitespace from fields
            .from_reader(reader);

        let mut processed = 0u64;
        let mut skipped = 0u64;

        for result in csv_reader.deserialize() {
            // Step 1: Parse CSV row into raw dirty EventRecord
            let record: EventRecord = result?;

            let row_num = processed + skipped + 1;
            log::trace!("[row {row_num}] Parsing: {record}");

            // Step 2: Convert raw dirty EventRecord into validated Event
            let event = Event::try_from(record)?;

            // Step 3: Process validated Event
            if let Err(e) = self.process_event(event) {
                log::warn!("[row {row_num}] - Skipped: {e}");
                skipped += 1;
            } else {
                processed += 1;
            }
        }

        log::info!(
            "Processing complete: {} processed, {} skipped, {} records",
            processed,
            skipped,
            self.records.len()
        );
        Ok(())
    }

    /// Secondary API: Write final records to any sink (Stdout, File, `TcpStream`, etc.)
    /// Note that the CSV writer is buffered automatically, so you should not wrap wtr in a buffered writer like `io::BufWriter`.
    pub fn export_records<W: Write>(&self, writer: W) -> Result<(), Error> {
        log::info!("Exporting {} records", self.records.len());

        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in self.records.values() {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;

        log::trace!("Export complete");
        Ok(())
    }

    /// Returns the number of records in the ledger
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Returns the record with the given ID, if any
    pub fn record(&self, tx: RecordId) -> Option<&PaymentRecord> {
        self.records.get(&tx)
    }

    fn process_event(&mut self, event: Event) -> Result<(), ProcessingError> {
        log::trace!("Processing event: {event}");
        match event {
            Event::Charge(charge) => self.handle_charge(charge),
            Event::Status(update) => self.handle_status(update),
        }
    }
}

// =============================================================================
// Event Handlers
// =============================================================================

impl PaymentLedger {
    fn handle_charge(&mut self, charge: Charge) -> Result<(), ProcessingError> {
        log::trace!(
            "[charge] kind={} tx={} subject={}",
            charge.kind(),
            charge.tx(),
            charge.subject(),
        );
        let tx = charge.tx();

        if self.records.contains_key(&tx) {
            return Err(ProcessingError::DuplicateRecord { tx });
        }

        let record = PaymentRecord::new(
            tx,
            charge.kind(),
            charge.subject().to_owned(),
            charge.amount(),
            charge.entry(),
        );
        log::debug!(
            "[charge] Created {} record {} for subject {}",
            charge.kind(),
            tx,
            charge.subject()
        );
        self.records.insert(tx, record);

        log::trace!(
            "[charge] tx={} amount={} -> entry_status={}",
            tx,
            charge.amount(),
            charge.entry()
        );
        Ok(())
    }

    fn handle_status(&mut self, update: StatusUpdate) -> Result<(), ProcessingError> {
        log::trace!("[status] tx={} status={}", update.tx(), update.status());
        let tx = update.tx();

        let record = self
            .records
            .get_mut(&tx)
            .ok_or(ProcessingError::RecordNotFound { tx })?;

        let from = record.status();
        record.transition(update.status())?;

        log::trace!("[status] tx={} {} -> {}", tx, from, record.status());
        Ok(())
    }
}
