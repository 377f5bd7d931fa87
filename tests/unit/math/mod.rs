mod angle;
