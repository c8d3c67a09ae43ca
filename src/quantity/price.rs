quantity!(EuroPerMegawattHour, "€/MWh");
quantity!(EuroPerTonne, "€/t");
