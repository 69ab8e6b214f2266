pub mod fetcher;
pub mod m3u_parser;
pub mod m3u_writer;
pub mod session;
pub mod users;
pub mod xtream;
