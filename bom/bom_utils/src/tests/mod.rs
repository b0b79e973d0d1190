mod packing_properties;
