mod catalog_coverage;
