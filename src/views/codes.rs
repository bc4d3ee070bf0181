//! Metric codes read from `company-metrics`.

// Environmental overview pie.
pub const ENV_GHG: &str = "ENV_GHG";
pub const ENV_ENERGY: &str = "ENV_Energy";
pub const ENV_WATER: &str = "ENV_Water";
pub const ENV_WASTE: &str = "ENV_Waste";

pub const ENV_GHG_TOTAL: &str = "ENV_GHG_Total";
pub const ENV_GHG_INTENSITY: &str = "ENV_GHG_Intensity";

pub const ENV_ENERGY_RENEWABLE: &str = "ENV_Energy_Renewable";
pub const ENV_ENERGY_RENEWABLE_PCT: &str = "ENV_Energy_Renewable_Pct";
pub const ENV_ENERGY_NON_RENEWABLE: &str = "ENV_Energy_NonRenewable";

pub const ENV_WATER_CONSUMPTION: &str = "ENV_Water_Consumption";
pub const ENV_WATER_INTENSITY: &str = "ENV_Water_Intensity";
pub const ENV_WATER_RECYCLED: &str = "ENV_Water_Recycled";
pub const ENV_WATER_RECYCLED_PCT: &str = "ENV_Water_Recycled_Pct";

pub const ENV_WASTE_RECYCLED: &str = "ENV_Waste_Recycled";
pub const ENV_WASTE_RECYCLED_PCT: &str = "ENV_Waste_Recycled_Pct";
pub const ENV_WASTE_LANDFILL: &str = "ENV_Waste_Landfill";

pub const SOC_FEMALE_PCT: &str = "SOC_Female_Pct";
pub const SOC_AGE_UNDER_30: &str = "SOC_Age_Under30";
pub const SOC_AGE_30_50: &str = "SOC_Age_30_50";
pub const SOC_AGE_OVER_50: &str = "SOC_Age_Over50";
pub const SOC_TRAINING_TECHNICAL: &str = "SOC_Training_Technical";
pub const SOC_TRAINING_LEADERSHIP: &str = "SOC_Training_Leadership";
pub const SOC_TRAINING_SOFT_SKILLS: &str = "SOC_Training_Soft_Skills";
pub const SOC_TRAINING_COMPLIANCE: &str = "SOC_Training_Compliance";
pub const SOC_TRAINING_INNOVATION: &str = "SOC_Training_Innovation";
pub const SOC_INJURY_RATE: &str = "SOC_Injury_Rate";
pub const SOC_FATALITIES: &str = "SOC_Fatalities";
pub const SOC_LOST_DAYS: &str = "SOC_Lost_Days";

pub const GOV_BOARD_INDEPENDENCE: &str = "GOV_Board_Independence";
pub const GOV_BOARD_FEMALE: &str = "GOV_Board_Female";
pub const GOV_MGMT_FEMALE: &str = "GOV_Mgmt_Female";
pub const GOV_CERT_ISO14001: &str = "GOV_Cert_ISO14001";
pub const GOV_CERT_ISO45001: &str = "GOV_Cert_ISO45001";
pub const GOV_CERT_ISO27001: &str = "GOV_Cert_ISO27001";
pub const GOV_CERT_ISO9001: &str = "GOV_Cert_ISO9001";
pub const GOV_FRAMEWORK_GRI: &str = "GOV_Framework_GRI";
pub const GOV_FRAMEWORK_SASB: &str = "GOV_Framework_SASB";
pub const GOV_FRAMEWORK_TCFD: &str = "GOV_Framework_TCFD";
pub const GOV_FRAMEWORK_SDGS: &str = "GOV_Framework_SDGs";
