/// Filesystem adapters for CSV input and output
mod csv_reader;
mod csv_writer;

pub use csv_reader::CsvInputReader;
pub use csv_writer::CsvResultSink;
