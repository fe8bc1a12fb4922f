pub mod libsql;
