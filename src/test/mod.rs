mod fmp;
