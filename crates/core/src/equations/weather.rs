//! Weather derivative nodes

use crate::physics::weather;
use crate::variable::{VarId, VariableStore};

pub(super) fn dew_point(v: &mut VariableStore) {
    let td = weather::dew_point(
        v.value(VarId::WthrAirTemp),
        v.value(VarId::WthrWetBulbTemp),
        v.value(VarId::SiteElevation),
    );
    v.set(VarId::WthrDewPointTemp, td);
}

pub(super) fn relative_humidity(v: &mut VariableStore) {
    let rh = weather::relative_humidity(v.value(VarId::WthrAirTemp), v.value(VarId::WthrDewPointTemp));
    v.set(VarId::WthrRelativeHumidity, rh);
}

pub(super) fn cumulus_base_ht(v: &mut VariableStore) {
    let ht = weather::cumulus_base_height(v.value(VarId::WthrAirTemp), v.value(VarId::WthrDewPointTemp));
    v.set(VarId::WthrCumulusBaseHt, ht);
}

pub(super) fn heat_index(v: &mut VariableStore) {
    let hi = weather::heat_index(v.value(VarId::WthrAirTemp), v.value(VarId::WthrRelativeHumidity));
    v.set(VarId::WthrHeatIndex, hi);
}

pub(super) fn summer_simmer_index(v: &mut VariableStore) {
    let ssi = weather::summer_simmer_index(v.value(VarId::WthrAirTemp), v.value(VarId::WthrRelativeHumidity));
    v.set(VarId::WthrSummerSimmerIndex, ssi);
}

pub(super) fn wind_chill(v: &mut VariableStore) {
    let wc = weather::wind_chill(v.value(VarId::WthrAirTemp), v.value(VarId::WindSpeedAtMidflame));
    v.set(VarId::WthrWindChillTemp, wc);
}
