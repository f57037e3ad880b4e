mod test_secret_providers;
