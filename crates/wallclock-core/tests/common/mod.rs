pub mod time_server;
