mod test_shutdown_signal;
